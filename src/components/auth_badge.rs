//! Header badge showing the signed-in identifier with a sign-out button.

#[cfg(test)]
#[path = "auth_badge_test.rs"]
mod auth_badge_test;

use leptos::prelude::*;

use crate::components::auth_provider::use_auth;

/// Display text for an auth value.
pub fn badge_label(value: Option<&str>) -> String {
    value.map_or_else(|| "Signed out".to_owned(), |id| format!("Signed in as {id}"))
}

/// Current identifier and a button that clears it from memory.
#[component]
pub fn AuthBadge() -> impl IntoView {
    let auth = use_auth();

    let label = move || badge_label(auth.current().as_deref());
    let signed_out = move || auth.current().is_none();
    let on_sign_out = move |_| auth.set(None);

    view! {
        <div class="auth-badge">
            <span class="auth-badge__label">{label}</span>
            <button class="btn auth-badge__sign-out" disabled=signed_out on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}
