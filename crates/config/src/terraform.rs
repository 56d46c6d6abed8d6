//! Per-command message settings for terraform output.
//!
//! These values are handed as-is to the templating layer; nothing here
//! interprets templates or labels.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Terraform message settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Terraform {
    #[serde(deserialize_with = "null_as_default")]
    pub default: Template,
    #[serde(deserialize_with = "null_as_default")]
    pub fmt: Template,
    #[serde(deserialize_with = "null_as_default")]
    pub plan: Plan,
    #[serde(deserialize_with = "null_as_default")]
    pub apply: Template,
    /// Post terraform output without stripping it down to the summary.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_raw_output: bool,
}

/// A message template for one terraform command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub template: String,
}

/// Settings for `terraform plan` results.
///
/// The `when_*` blocks override the label (and for destroys, the template)
/// depending on what the plan contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub template: String,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Label::is_empty"
    )]
    pub when_add_or_update_only: Label,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "WhenDestroy::is_empty"
    )]
    pub when_destroy: WhenDestroy,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Label::is_empty"
    )]
    pub when_no_changes: Label,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Label::is_empty"
    )]
    pub when_plan_error: Label,
}

/// A label and its color, applied to the pull request for a plan outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(rename = "label_color", skip_serializing_if = "String::is_empty")]
    pub color: String,
}

impl Label {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.color.is_empty()
    }
}

/// Overrides applied when a plan destroys resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhenDestroy {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template: String,
    #[serde(rename = "label_color", skip_serializing_if = "String::is_empty")]
    pub color: String,
}

impl WhenDestroy {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.template.is_empty() && self.color.is_empty()
    }
}
