use yew::prelude::*;

use super::PanicButton;

/// Host page shell. Mounts the panic button with the identity the alert is
/// filed under.
#[function_component(App)]
pub fn app() -> Html {
    // TODO: wire real session identity and device geolocation instead of
    // these placeholder values
    html! {
        <PanicButton
            user_id={"Trevah".to_string()}
            location={"Soshanguve South".to_string()}
        />
    }
}
