use storefront_core::{SearchQuery, SortMode, StoreEvent};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterBarProps {
    /// Options for the category dropdown, after "All Categories".
    #[prop_or_default]
    pub categories: Vec<String>,
    pub on_event: Callback<StoreEvent>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let search_ref = use_node_ref();
    let min_ref = use_node_ref();
    let max_ref = use_node_ref();

    let on_apply = {
        let cb = props.on_event.clone();
        let search_ref = search_ref.clone();
        let min_ref = min_ref.clone();
        let max_ref = max_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let query = SearchQuery::from_inputs(
                &input_value(&search_ref),
                &input_value(&min_ref),
                &input_value(&max_ref),
            );
            cb.emit(StoreEvent::Search(query));
        })
    };

    let on_category = {
        let cb = props.on_event.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(StoreEvent::SelectCategory(select.value()));
        })
    };

    let on_sort = {
        let cb = props.on_event.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(StoreEvent::Sort(SortMode::from_value(&select.value())));
        })
    };

    html! {
        <section class="filters" aria-label="Product filters">
            <div class="search">
                <input id="productSearch" type="text" placeholder="Search products" ref={search_ref} />
                <input id="minPrice" type="number" min="0" placeholder="Min price" ref={min_ref} />
                <input id="maxPrice" type="number" min="0" placeholder="Max price" ref={max_ref} />
                <button id="apply-filter" type="button" onclick={on_apply}>{ "Apply Filter" }</button>
            </div>
            <label for="category">{ "Category" }</label>
            <select id="category" onchange={on_category}>
                <option value="">{ "All Categories" }</option>
                { for props.categories.iter().map(|category| html! {
                    <option value={category.clone()}>{ category.clone() }</option>
                }) }
            </select>
            <label for="sorting">{ "Sort" }</label>
            <select id="sorting" onchange={on_sort}>
                <option value={SortMode::Catalog.value()}>{ "Default" }</option>
                <option value={SortMode::Min.value()}>{ "Price: Low to High" }</option>
                <option value={SortMode::Max.value()}>{ "Price: High to Low" }</option>
            </select>
        </section>
    }
}
