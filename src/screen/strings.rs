//! English display strings for the site basics screen.
//!
//! Slot comments name what each `%N$s` receives.

pub const SCREEN_TITLE: &str = "Site basics";
pub const SCREEN_DESCRIPTION: &str = "Configure the basics for your website.";

pub const SITE_INFO_TITLE: &str = "Site info";
pub const SITE_INFO_DESCRIPTION: &str = "Set the basic info for your website. Note that some of these values can be used as variables when configuring the search appearance of your content.";

/// %1$s/%2$s: emphasis open/close.
pub const VARIABLES_INFO: &str = "You can use %1$sSite title%2$s, %1$sTagline%2$s and %1$sSeparator%2$s as variables when configuring the search appearance of your content.";

/// %1$s/%2$s: emphasis open/close.
pub const CANNOT_MANAGE_OPTIONS: &str =
    "We're sorry, you're not allowed to edit the %1$sSite title%2$s and %1$sTagline%2$s.";

pub const SITE_TITLE_LABEL: &str = "Site title";
/// %1$s/%2$s: anchor open/close.
pub const SITE_TITLE_DESCRIPTION: &str =
    "This field updates the %1$sSite title in your WordPress settings%2$s.";

pub const TAGLINE_LABEL: &str = "Tagline";
/// %1$s/%2$s: anchor open/close.
pub const TAGLINE_DESCRIPTION: &str =
    "This field updates the %1$sTagline in your WordPress settings%2$s.";

pub const SEPARATOR_LABEL: &str = "Title separator";

/// %1$s/%2$s: emphasis open/close. %3$s/%4$s: Site features link open/close.
pub const OPEN_GRAPH_DISABLED: &str = "The %1$sSite image%2$s requires Open Graph data, which is currently disabled in the \u{2018}Social sharing\u{2019} section in %3$sSite features%4$s.";

pub const SITE_IMAGE_LABEL: &str = "Site image";
pub const SITE_IMAGE_DESCRIPTION: &str =
    "This image is used as a fallback for posts/pages that don't have any images set.";
/// %1$s/%2$s: strong open/close. %3$s: the size.
pub const RECOMMENDED_SIZE: &str = "Recommended size for this image is %1$s%3$s%2$s";
pub const RECOMMENDED_SIZE_VALUE: &str = "1200x675px";

pub const SECURITY_TITLE: &str = "Security & privacy";

pub const RESTRICT_ADVANCED_LABEL: &str = "Restrict advanced settings for authors";
pub const RESTRICT_ADVANCED_DESCRIPTION: &str = "By default only editors and administrators can access the Advanced - and Schema section of the Yoast SEO metabox. Disabling this allows access to all users.";

pub const USAGE_TRACKING_LABEL: &str = "Usage tracking";
pub const USAGE_TRACKING_LINK: &str = "https://yoa.st/usage-tracking-2";
/// %1$s/%2$s: anchor open/close.
pub const USAGE_TRACKING_DESCRIPTION: &str = "Usage tracking allows us to track some data about your site to improve our plugin. %1$sAllow us to track some data about your site to improve our plugin%2$s.";
