//! Setup wizard state for the channel configuration guide

use crate::config::{ChannelConfig, Field};

/// One step of the setup guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupStep {
    /// Step heading shown to the user
    pub title: &'static str,

    /// What the user is asked to do
    pub description: &'static str,

    /// Configuration field this step fills in
    pub field: Field,

    /// Whether the field value should be masked in input forms
    pub secret: bool,

    /// Input placeholder text
    pub placeholder: &'static str,

    /// Help text explaining where to find the value
    pub helper: &'static str,
}

/// The fixed setup steps, in completion order
pub const SETUP_STEPS: &[SetupStep] = &[
    SetupStep {
        title: "アクセストークンの設定",
        description: "LINE Developersコンソールで発行したチャネルアクセストークンを入力してください。",
        field: Field::AccessToken,
        secret: true,
        placeholder: "アクセストークンを入力",
        helper: "アクセストークンは LINE Developers コンソールの「Messaging API設定」タブで発行できます。",
    },
    SetupStep {
        title: "Webhook URLの設定",
        description: "LINEボットがメッセージを受信するためのWebhook URLを入力してください。",
        field: Field::Webhooks,
        secret: false,
        placeholder: "Webhook URLを入力",
        helper: "Webhook URLは、LINEボットがメッセージを受信するためのエンドポイントです。通常はhttpsで始まる必要があります。",
    },
];

/// Wizard position over the fixed step list
///
/// The guide holds only the cursor; field values live in the
/// configuration the caller passes to each check. A step is complete
/// when its field is non-empty, and forward navigation requires the
/// current step to be complete.
#[derive(Debug, Clone)]
pub struct SetupGuide {
    current: usize,
}

impl SetupGuide {
    /// Start the guide at the first step
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// The full step list
    pub fn steps(&self) -> &'static [SetupStep] {
        SETUP_STEPS
    }

    /// Index of the current step
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current step
    pub fn current_step(&self) -> &'static SetupStep {
        &SETUP_STEPS[self.current]
    }

    /// Whether the step at `index` is complete for `config`
    pub fn is_step_complete(&self, config: &ChannelConfig, index: usize) -> bool {
        SETUP_STEPS
            .get(index)
            .map(|step| !config.get(step.field).is_empty())
            .unwrap_or(false)
    }

    /// Move to the next step.
    ///
    /// Returns false (and stays put) when the current step is
    /// incomplete. On the last step a complete field finishes the
    /// guide without moving.
    pub fn advance(&mut self, config: &ChannelConfig) -> bool {
        if !self.is_step_complete(config, self.current) {
            return false;
        }
        if self.current < SETUP_STEPS.len() - 1 {
            self.current += 1;
        }
        true
    }

    /// Move to the previous step; returns false at the first step
    pub fn back(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Whether every step is complete for `config`
    pub fn is_complete(&self, config: &ChannelConfig) -> bool {
        (0..SETUP_STEPS.len()).all(|index| self.is_step_complete(config, index))
    }
}

impl Default for SetupGuide {
    fn default() -> Self {
        Self::new()
    }
}
