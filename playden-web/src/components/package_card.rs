use crate::components::checkout::format_amount;
use playden_shop::catalog::Package;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub package: Package,
    /// Fired with the package id when the tile is activated.
    pub on_select: Callback<u32>,
}

/// One package tile in the game's package grid. Capped packages render
/// disabled with the limit notice instead of the buy affordance.
#[function_component(PackageCard)]
pub fn package_card(props: &Props) -> Html {
    let package = &props.package;
    let on_click = {
        let on_select = props.on_select.clone();
        let id = package.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    let points = package.effective_points();

    html! {
        <button
            type="button"
            class={classes!("package-card", (!package.can_purchase).then_some("package-card--capped"))}
            id={format!("package-{}", package.id)}
            disabled={!package.can_purchase}
            onclick={on_click}
        >
            { package.is_promotional.then(|| html! {
                <span class="package-card__promo">
                    { package.promotional_label.clone().unwrap_or_else(|| String::from("Promo")) }
                </span>
            }) }
            <span class="package-card__name">{ &package.name }</span>
            <span class="package-card__duration">{ format!("{} min", package.duration_minutes) }</span>
            <span class="package-card__price">
                { package.discounted_from().map(|original| html! {
                    <s class="package-card__original-price">{ format_amount(original) }</s>
                }) }
                { format_amount(package.price) }
            </span>
            { (points > 0).then(|| html! {
                <span class="package-card__points">{ format!("+{points} pts") }</span>
            }) }
            { (!package.can_purchase).then(|| html! {
                <span class="package-card__limit">{ "Purchase limit reached" }</span>
            }) }
        </button>
    }
}
