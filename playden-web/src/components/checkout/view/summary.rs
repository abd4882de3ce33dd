use super::super::state::format_amount;
use playden_shop::checkout::CheckoutSession;
use yew::prelude::*;

/// Order summary: package, price lines, exact total. The reservation fee
/// line only exists while a slot is being booked and the game charges one.
pub fn render_summary(session: &CheckoutSession) -> Html {
    let Some(package) = session.package() else {
        return html! {
            <p class="checkout__empty">{ "This package is not available for purchase." }</p>
        };
    };
    let points = package.effective_points();

    html! {
        <section class="checkout__summary">
            <h3 class="checkout__package-name">{ &package.name }</h3>
            <dl class="checkout__lines">
                <div class="checkout__line">
                    <dt>{ "Play time" }</dt>
                    <dd>{ format!("{} min", package.duration_minutes) }</dd>
                </div>
                <div class="checkout__line">
                    <dt>{ "Price" }</dt>
                    <dd>{ format_amount(package.price) }</dd>
                </div>
                { session.fee_due().map(|fee| html! {
                    <div class="checkout__line">
                        <dt>{ "Reservation fee" }</dt>
                        <dd>{ format_amount(fee) }</dd>
                    </div>
                }) }
                <div class="checkout__line checkout__line--total">
                    <dt>{ "Total" }</dt>
                    <dd>{ session.total_due().map(format_amount).unwrap_or_default() }</dd>
                </div>
                { (points > 0).then(|| html! {
                    <div class="checkout__line checkout__line--points">
                        <dt>{ "Points earned" }</dt>
                        <dd>{ format!("+{points}") }</dd>
                    </div>
                }) }
            </dl>
        </section>
    }
}
