use url::Url;

use crate::error::ScreenError;
use crate::prefs::snapshot::PreferenceSnapshot;
use crate::text::composer::Composer;
use crate::text::interpolate::tag_map;
use crate::text::rich_text::{ElementTemplate, RichText};

/// Resolves a link target plus a `%1$s…%2$s` content template into a
/// clickable affordance.
pub trait LinkProvider {
    fn select_link(
        &self,
        composer: &mut Composer,
        id: &str,
        link: &str,
        content: &str,
    ) -> Result<RichText, ScreenError>;
}

/// Opens links in a new tab, tagged with the site's `linkParams`.
#[derive(Debug, Clone, Default)]
pub struct PreferenceLinkProvider {
    params: Vec<(String, String)>,
}

impl PreferenceLinkProvider {
    pub fn new(prefs: &PreferenceSnapshot) -> Self {
        Self {
            params: prefs.link_params(),
        }
    }
}

impl LinkProvider for PreferenceLinkProvider {
    fn select_link(
        &self,
        composer: &mut Composer,
        id: &str,
        link: &str,
        content: &str,
    ) -> Result<RichText, ScreenError> {
        let anchor = ElementTemplate::new("a")
            .with_attr("id", id)
            .with_attr("href", add_query_args(link, &self.params))
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer");
        composer.markup(id, content, &["<a>", "</a>"], &tag_map([("a", anchor)]))
    }
}

/// Append `params` to `link`'s query, keeping any `#fragment`. Empty pairs
/// left by a trailing `?` or `&` are dropped. A link that does not parse as
/// an absolute URL is returned unchanged.
pub fn add_query_args(link: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return link.to_string();
    }

    let mut url = match Url::parse(link) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(link, error = %e, "link is not an absolute URL, query args skipped");
            return link.to_string();
        }
    };

    let existing: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter(|(k, v)| !k.is_empty() || !v.is_empty())
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(existing)
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    url.into()
}
