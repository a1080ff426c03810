use crate::error::ScreenError;
use crate::field::input::{FieldInput, apply_input};
use crate::field::resolver::resolve_field;
use crate::form::form_model::FormState;
use crate::form::path::FieldPath;
use crate::prefs::snapshot::PreferenceSnapshot;
use crate::screen::links::PreferenceLinkProvider;
use crate::screen::screen_model::Screen;
use crate::screen::site_basics::{STATIC_TEXT_INPUTS, StaticTexts, assemble, site_basics_fields};
use crate::text::composer::TemplateMode;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Static texts memoized on the fingerprint of the preferences they read.
#[derive(Debug, Default)]
pub struct TextCache {
    key: Option<String>,
    texts: Option<StaticTexts>,
    computations: u64,
}

impl TextCache {
    /// Returns the cached texts, recomposing only when the fingerprint of
    /// `STATIC_TEXT_INPUTS` changed. Failed compositions are not cached.
    pub fn get(
        &mut self,
        prefs: &PreferenceSnapshot,
        mode: TemplateMode,
    ) -> Result<(&StaticTexts, bool), ScreenError> {
        let key = format!("{:?}:{}", mode, prefs.fingerprint(&STATIC_TEXT_INPUTS));
        let hit = self.key.as_deref() == Some(key.as_str()) && self.texts.is_some();
        if !hit {
            let links = PreferenceLinkProvider::new(prefs);
            let texts = StaticTexts::compose(prefs, &links, mode)?;
            self.computations += 1;
            self.key = Some(key);
            self.texts = Some(texts);
        }
        match &self.texts {
            Some(texts) => Ok((texts, hit)),
            None => Err(ScreenError::Malformed("static texts missing after compose".to_string())),
        }
    }

    /// How many times texts were actually composed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

/// One editing session of the screen: owns the form values and the
/// preference snapshot, and renders after every change.
pub struct ScreenSession {
    form: FormState,
    prefs: PreferenceSnapshot,
    mode: TemplateMode,
    cache: TextCache,
    tracer: Option<TraceLogger>,
    pass: u64,
}

impl ScreenSession {
    pub fn new(form: FormState, prefs: PreferenceSnapshot, mode: TemplateMode) -> Self {
        Self {
            form,
            prefs,
            mode,
            cache: TextCache::default(),
            tracer: None,
            pass: 0,
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn prefs(&self) -> &PreferenceSnapshot {
        &self.prefs
    }

    pub fn cache(&self) -> &TextCache {
        &self.cache
    }

    /// Swap in a new snapshot, e.g. after permissions changed.
    pub fn replace_prefs(&mut self, prefs: PreferenceSnapshot) {
        self.prefs = prefs;
    }

    pub fn render(&mut self) -> Result<Screen, ScreenError> {
        let (texts, cache_hit) = self.cache.get(&self.prefs, self.mode)?;
        let screen = assemble(&self.form, &self.prefs, texts);

        self.pass += 1;
        tracing::debug!(
            pass = self.pass,
            cache_hit,
            fingerprint = %screen.resolution.fingerprint(),
            "rendered site basics"
        );
        if let Some(tracer) = &self.tracer {
            tracer.log(
                &TraceEvent::now(self.pass)
                    .with_resolution(&screen.resolution)
                    .with_cache_hit(cache_hit)
                    .with_diagnostics(&screen.diagnostics),
            );
        }
        Ok(screen)
    }

    /// Apply an edit to the field bound to `path`.
    pub fn apply(&mut self, path: &FieldPath, input: FieldInput) -> Result<(), ScreenError> {
        let (texts, _) = self.cache.get(&self.prefs, self.mode)?;
        let fields = site_basics_fields(&self.prefs, texts);
        let field = fields
            .iter()
            .find(|f| &f.path == path)
            .ok_or_else(|| ScreenError::UnknownField(path.to_string()))?;

        let state = resolve_field(field, &self.form, &self.prefs);
        let action = format!("{} <- {:?}", path, input);
        let result = apply_input(field, &state, input, &mut self.form);

        if let Err(e) = &result {
            tracing::warn!(path = %path, error = %e, "edit rejected");
        }
        if let Some(tracer) = &self.tracer {
            let mut event = TraceEvent::now(self.pass).with_action(action);
            if let Err(e) = &result {
                event = event.with_rejection(e);
            }
            tracer.log(&event);
        }
        result
    }

    /// Apply a raw `value` string to the field at `path`, interpreting it for
    /// the field's widget kind.
    pub fn apply_raw(&mut self, path: &str, value: &str) -> Result<(), ScreenError> {
        let path = FieldPath::parse(path)?;
        let (texts, _) = self.cache.get(&self.prefs, self.mode)?;
        let fields = site_basics_fields(&self.prefs, texts);
        let field = fields
            .iter()
            .find(|f| f.path == path)
            .ok_or_else(|| ScreenError::UnknownField(path.to_string()))?;
        let input = FieldInput::parse_for(field, value)?;
        self.apply(&path, input)
    }
}
