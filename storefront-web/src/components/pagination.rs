use storefront_core::{PageControls, StoreEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PaginationProps {
    /// `None` leaves the region empty.
    #[prop_or_default]
    pub controls: Option<PageControls>,
    pub on_event: Callback<StoreEvent>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let Some(controls) = props.controls.as_ref() else {
        return html! { <div id="pagination-controls" class="pagination"></div> };
    };
    let go = |event: StoreEvent| {
        let cb = props.on_event.clone();
        Callback::from(move |_: MouseEvent| cb.emit(event.clone()))
    };

    html! {
        <div id="pagination-controls" class="pagination" role="group" aria-label="Pagination">
            <button type="button" disabled={controls.previous_disabled} onclick={go(StoreEvent::PreviousPage)}>{ "Previous" }</button>
            { for controls.pages.iter().map(|button| {
                let class = classes!("page-button", button.current.then_some("active"));
                html! {
                    <button type="button"
                        class={class}
                        aria-current={if button.current { Some::<AttrValue>("page".into()) } else { None }}
                        onclick={go(StoreEvent::GoToPage(button.number))}>
                        { button.number }
                    </button>
                }
            }) }
            <button type="button" disabled={controls.next_disabled} onclick={go(StoreEvent::NextPage)}>{ "Next" }</button>
            <span class="page-info">{ controls.label() }</span>
        </div>
    }
}
