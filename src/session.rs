//! The editing boundary: field-by-field edits over one parameter snapshot.
//!
//! Every accepted edit replaces the snapshot; a rejected edit leaves it as it
//! was. Rendering is recomputed from scratch on each [`EditSession::output`]
//! call.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::codegen::{generate_full, RenderOutput};
use crate::error::Result;
use crate::params::{
    check_color, check_range, Kind, StyleParameters, TrianglePosition, BORDER_RADIUS_RANGE,
    PADDING_RANGE, TRIANGLE_SIZE_RANGE,
};

/// How long a "copied" acknowledgement stays up.
pub const COPY_RESET: Duration = Duration::from_millis(2000);

/// One user edit. Serialized as `{"field": "paddingX", "value": 14}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldEdit {
    BackgroundColor(String),
    TextColor(String),
    ShadowEnabled(bool),
    TriangleEnabled(bool),
    BodyText(String),
    TrianglePosition(TrianglePosition),
    TriangleSize(i32),
    PaddingX(i32),
    PaddingY(i32),
    BorderRadius(i32),
}

impl FieldEdit {
    fn validate(&self) -> Result<()> {
        match self {
            FieldEdit::BackgroundColor(c) => check_color("backgroundColor", c),
            FieldEdit::TextColor(c) => check_color("textColor", c),
            FieldEdit::TriangleSize(v) => check_range("triangleSize", *v, TRIANGLE_SIZE_RANGE),
            FieldEdit::PaddingX(v) => check_range("paddingX", *v, PADDING_RANGE),
            FieldEdit::PaddingY(v) => check_range("paddingY", *v, PADDING_RANGE),
            FieldEdit::BorderRadius(v) => check_range("borderRadius", *v, BORDER_RADIUS_RANGE),
            FieldEdit::ShadowEnabled(_)
            | FieldEdit::TriangleEnabled(_)
            | FieldEdit::BodyText(_)
            | FieldEdit::TrianglePosition(_) => Ok(()),
        }
    }

    /// Produce the next snapshot. Does not validate.
    fn apply_to(self, params: &StyleParameters) -> StyleParameters {
        let mut next = params.clone();
        match self {
            FieldEdit::BackgroundColor(c) => next.background_color = c,
            FieldEdit::TextColor(c) => next.text_color = c,
            FieldEdit::ShadowEnabled(b) => next.shadow_enabled = b,
            FieldEdit::TriangleEnabled(b) => next.triangle_enabled = b,
            FieldEdit::BodyText(t) => next.body_text = t,
            FieldEdit::TrianglePosition(p) => next.triangle_position = p,
            FieldEdit::TriangleSize(v) => next.triangle_size = v,
            FieldEdit::PaddingX(v) => next.padding_x = v,
            FieldEdit::PaddingY(v) => next.padding_y = v,
            FieldEdit::BorderRadius(v) => next.border_radius = v,
        }
        next
    }
}

/// Which output string a copy acknowledgement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Markup,
    Stylesheet,
}

impl CopyTarget {
    pub fn from_path_segment(s: &str) -> Option<Self> {
        match s {
            "markup" | "html" => Some(CopyTarget::Markup),
            "stylesheet" | "css" => Some(CopyTarget::Stylesheet),
            _ => None,
        }
    }
}

/// Two timer-driven "copied" flags. Each one reads as raised for
/// [`COPY_RESET`] after it was marked, then falls back on its own.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    markup_at: Option<Instant>,
    stylesheet_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn mark(&mut self, target: CopyTarget, now: Instant) {
        *self.slot(target) = Some(now);
    }

    pub fn is_active(&self, target: CopyTarget, now: Instant) -> bool {
        let marked = match target {
            CopyTarget::Markup => self.markup_at,
            CopyTarget::Stylesheet => self.stylesheet_at,
        };
        marked.is_some_and(|at| now.saturating_duration_since(at) < COPY_RESET)
    }

    fn slot(&mut self, target: CopyTarget) -> &mut Option<Instant> {
        match target {
            CopyTarget::Markup => &mut self.markup_at,
            CopyTarget::Stylesheet => &mut self.stylesheet_at,
        }
    }
}

/// One in-session parameter record plus its copy acknowledgements.
#[derive(Debug, Clone)]
pub struct EditSession {
    kind: Kind,
    params: StyleParameters,
    pub copied: CopyFeedback,
}

impl EditSession {
    /// Start from the defaults of `kind`.
    pub fn new(kind: Kind) -> Self {
        Self::with_params(kind, kind.defaults())
    }

    /// Start from an already validated record.
    pub fn with_params(kind: Kind, params: StyleParameters) -> Self {
        Self {
            kind,
            params,
            copied: CopyFeedback::default(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn params(&self) -> &StyleParameters {
        &self.params
    }

    /// Validate and apply one edit.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<()> {
        edit.validate()?;
        self.params = edit.apply_to(&self.params);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.params = self.kind.defaults();
    }

    pub fn output(&self) -> RenderOutput {
        generate_full(&self.params, self.kind)
    }

    /// The text a copy button hands to the clipboard, raising its flag.
    pub fn copy(&mut self, target: CopyTarget, now: Instant) -> String {
        self.copied.mark(target, now);
        let output = self.output();
        match target {
            CopyTarget::Markup => output.markup,
            CopyTarget::Stylesheet => output.stylesheet,
        }
    }
}
