//! Fixed outbound targets and page literals. The rest of the app treats
//! these as opaque values; none of them vary at runtime.

/// Hero heading, split where the accent gradient starts.
pub const HERO_TITLE_LEAD: &str = "O guia completo para ";
pub const HERO_TITLE_ACCENT: &str = "Formalização do seu negócio";

/// Third-party checkout page for the guide.
pub const CHECKOUT_URL: &str = "https://pay.hotmart.com/V84065811W?checkoutMode=10";

/// Hosted presentation video, embedded as-is.
pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/10fJRAj6gi4";
pub const VIDEO_TITLE: &str = "MEI O guia completo para Formalização do seu negócio";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/goncalvesassessorias/";
pub const FACEBOOK_URL: &str =
    "https://www.facebook.com/people/Gon%C3%A7alves-Assessoria/100094599639932/";
