use leptos::prelude::*;

/// Line icon served from `public/icons`.
///
/// The SVG is applied as a CSS mask over `currentColor`, so text colour
/// classes tint it.
#[component]
pub fn Icon(
    /// Icon name (file name without .svg)
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let mask = format!("--icon: url(/icons/{}.svg);", name);

    view! {
        <span
            class=format!("icon {}", class)
            style=mask
            data-icon=name
            aria-hidden="true"
        ></span>
    }
}

/// Icon names used across the page
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BOOK_OPEN: &str = "book-open";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CLOCK: &str = "clock";
    pub const DOLLAR_SIGN: &str = "dollar-sign";
    pub const FILE_TEXT: &str = "file-text";
    pub const HOME: &str = "home";
    pub const LIGHTBULB: &str = "lightbulb";
    pub const LOCK: &str = "lock";
    pub const MENU: &str = "menu";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const MINUS: &str = "minus";
    pub const PHONE: &str = "phone";
    pub const PLUS: &str = "plus";
    pub const SPARKLES: &str = "sparkles";
    pub const TARGET: &str = "target";
    pub const TRENDING_UP: &str = "trending-up";
    pub const USER: &str = "user";
    pub const X: &str = "x";
    pub const X_CIRCLE: &str = "x-circle";

    /// Every icon the page references, for asset checks
    pub const ALL: [&str; 21] = [
        ARROW_RIGHT,
        BOOK_OPEN,
        CHECK_CIRCLE,
        CHEVRON_DOWN,
        CLOCK,
        DOLLAR_SIGN,
        FILE_TEXT,
        HOME,
        LIGHTBULB,
        LOCK,
        MENU,
        MESSAGE_SQUARE,
        MINUS,
        PHONE,
        PLUS,
        SPARKLES,
        TARGET,
        TRENDING_UP,
        USER,
        X,
        X_CIRCLE,
    ];
}
