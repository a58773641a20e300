//! Three-step card creation flow.
//!
//! [`Wizard`] is the only owner of [`WizardState`]. Views read the state
//! through [`Wizard::state`] and report what happened by sending a
//! [`WizardMessage`] to [`Wizard::update`]; the wizard alone decides how
//! the step advances.

use std::fmt::{self, Display, Formatter};

use hanadayori_model::{CardState, PhotoResult, PhotoVariant};
use tracing::debug;
use url::Url;

use crate::error::WizardError;
use crate::share::LinkCodec;

/// Variant whose URL is embedded in the share link.
pub const LINK_VARIANT: PhotoVariant = PhotoVariant::Large;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    SelectImage,
    ComposeMessage,
    ShareLink,
}

impl WizardStep {
    pub const TOTAL: u8 = 3;

    /// 1-based position, as shown by a step indicator.
    pub const fn number(&self) -> u8 {
        match self {
            WizardStep::SelectImage => 1,
            WizardStep::ComposeMessage => 2,
            WizardStep::ShareLink => 3,
        }
    }

    const fn previous(&self) -> WizardStep {
        match self {
            WizardStep::SelectImage | WizardStep::ComposeMessage => {
                WizardStep::SelectImage
            }
            WizardStep::ShareLink => WizardStep::ComposeMessage,
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WizardStep::SelectImage => "selecting an image",
            WizardStep::ComposeMessage => "composing the message",
            WizardStep::ShareLink => "sharing the link",
        })
    }
}

/// Snapshot of the flow. Read-only outside this module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    selected: Option<PhotoResult>,
    message: Option<String>,
    link: Option<Url>,
}

impl WizardState {
    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selected(&self) -> Option<&PhotoResult> {
        self.selected.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn link(&self) -> Option<&Url> {
        self.link.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum WizardMessage {
    ImageSelected(PhotoResult),
    MessageSubmitted(String),
    Back,
}

impl WizardMessage {
    fn name(&self) -> &'static str {
        match self {
            WizardMessage::ImageSelected(_) => "ImageSelected",
            WizardMessage::MessageSubmitted(_) => "MessageSubmitted",
            WizardMessage::Back => "Back",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    codec: LinkCodec,
    view_url: Url,
}

impl Wizard {
    /// `view_url` is the viewer page links point at, e.g.
    /// `https://example.com/view`.
    pub fn new(view_url: Url, codec: LinkCodec) -> Self {
        Self {
            state: WizardState::default(),
            codec,
            view_url,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The card the current state describes, once an image and a message
    /// have both been chosen.
    pub fn card(&self) -> Option<CardState> {
        let photo = self.state.selected.as_ref()?;
        let message = self.state.message.as_ref()?;
        Some(card_for(photo, message))
    }

    /// Apply one message. On error the state is left exactly as it was.
    pub fn update(
        &mut self,
        message: WizardMessage,
    ) -> Result<WizardStep, WizardError> {
        let step = self.state.step;
        match (step, message) {
            (WizardStep::SelectImage, WizardMessage::ImageSelected(photo)) => {
                debug!(photo = %photo.id, "image selected");
                self.state.selected = Some(photo);
                self.state.step = WizardStep::ComposeMessage;
            }
            (
                WizardStep::ComposeMessage,
                WizardMessage::MessageSubmitted(text),
            ) => {
                if text.trim().is_empty() {
                    return Err(WizardError::EmptyMessage);
                }
                let photo = self
                    .state
                    .selected
                    .as_ref()
                    .ok_or(WizardError::NoImageSelected)?;

                let link = self
                    .codec
                    .encode(&self.view_url, &card_for(photo, &text))?;
                debug!(len = link.as_str().len(), "share link generated");

                self.state.message = Some(text);
                self.state.link = Some(link);
                self.state.step = WizardStep::ShareLink;
            }
            (_, WizardMessage::Back) => {
                self.state.step = step.previous();
            }
            (step, other) => {
                return Err(WizardError::UnexpectedMessage {
                    step,
                    message: other.name(),
                });
            }
        }
        Ok(self.state.step)
    }
}

fn card_for(photo: &PhotoResult, message: &str) -> CardState {
    CardState {
        image_url: photo.variant_url(LINK_VARIANT).to_string(),
        photographer: photo.photographer.clone(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkError;
    use crate::share::{Decoded, MIN_LINK_LEN};
    use hanadayori_model::{PhotoId, PhotoSrc};

    fn photo() -> PhotoResult {
        PhotoResult {
            id: PhotoId(42),
            width: 1200,
            height: 1800,
            url: "https://www.pexels.com/photo/42/".into(),
            photographer: "Jane".into(),
            photographer_url: "https://www.pexels.com/@jane".into(),
            photographer_id: 7,
            avg_color: Some("#AA3355".into()),
            src: PhotoSrc {
                large: "https://images.pexels.com/photos/42/large.jpeg".into(),
                portrait: "https://images.pexels.com/photos/42/portrait.jpeg"
                    .into(),
                ..PhotoSrc::default()
            },
            liked: false,
            alt: "pink roses".into(),
        }
    }

    fn wizard() -> Wizard {
        Wizard::new(
            Url::parse("https://hana.example/view").expect("url"),
            LinkCodec::default(),
        )
    }

    #[test]
    fn walks_all_three_steps() {
        let mut wizard = wizard();
        assert_eq!(wizard.state().step(), WizardStep::SelectImage);

        let step = wizard
            .update(WizardMessage::ImageSelected(photo()))
            .expect("select");
        assert_eq!(step, WizardStep::ComposeMessage);

        let step = wizard
            .update(WizardMessage::MessageSubmitted("Hi\nthere".into()))
            .expect("submit");
        assert_eq!(step, WizardStep::ShareLink);
        assert_eq!(step.number(), WizardStep::TOTAL);

        let link = wizard.state().link().expect("link").clone();
        assert_eq!(link.path(), "/view");
        assert_eq!(
            LinkCodec::decode_url(&link),
            Decoded::Card(CardState::new(
                "https://images.pexels.com/photos/42/large.jpeg",
                "Jane",
                "Hi\nthere",
            ))
        );
        assert_eq!(wizard.card(), LinkCodec::decode_url(&link).into_card());
    }

    #[test]
    fn blank_messages_do_not_advance() {
        let mut wizard = wizard();
        wizard
            .update(WizardMessage::ImageSelected(photo()))
            .expect("select");
        let before = wizard.state().clone();

        let err = wizard
            .update(WizardMessage::MessageSubmitted("  \n\t ".into()))
            .expect_err("blank");
        assert_eq!(err, WizardError::EmptyMessage);
        assert_eq!(wizard.state(), &before);
    }

    #[test]
    fn message_keeps_surrounding_whitespace() {
        let mut wizard = wizard();
        wizard
            .update(WizardMessage::ImageSelected(photo()))
            .expect("select");
        wizard
            .update(WizardMessage::MessageSubmitted(
                "  ありがとう\n".into(),
            ))
            .expect("submit");
        assert_eq!(wizard.state().message(), Some("  ありがとう\n"));
    }

    #[test]
    fn oversized_message_stays_on_compose() {
        let mut wizard = Wizard::new(
            Url::parse("https://hana.example/view").expect("url"),
            LinkCodec::new(MIN_LINK_LEN),
        );
        wizard
            .update(WizardMessage::ImageSelected(photo()))
            .expect("select");

        let err = wizard
            .update(WizardMessage::MessageSubmitted("花".repeat(300)))
            .expect_err("too large");
        assert!(matches!(err, WizardError::Link(LinkError::TooLarge { .. })));
        assert_eq!(wizard.state().step(), WizardStep::ComposeMessage);
        assert!(wizard.state().link().is_none());
        assert!(wizard.state().message().is_none());
    }

    #[test]
    fn back_steps_down_and_keeps_choices() {
        let mut wizard = wizard();
        wizard
            .update(WizardMessage::ImageSelected(photo()))
            .expect("select");
        wizard
            .update(WizardMessage::MessageSubmitted("hello".into()))
            .expect("submit");

        assert_eq!(
            wizard.update(WizardMessage::Back),
            Ok(WizardStep::ComposeMessage)
        );
        assert_eq!(
            wizard.update(WizardMessage::Back),
            Ok(WizardStep::SelectImage)
        );
        assert_eq!(
            wizard.update(WizardMessage::Back),
            Ok(WizardStep::SelectImage)
        );
        assert_eq!(wizard.state().selected().map(|p| p.id), Some(PhotoId(42)));
        assert_eq!(wizard.state().message(), Some("hello"));
    }

    #[test]
    fn out_of_step_messages_are_rejected() {
        let mut wizard = wizard();
        let err = wizard
            .update(WizardMessage::MessageSubmitted("early".into()))
            .expect_err("no image yet");
        assert_eq!(
            err,
            WizardError::UnexpectedMessage {
                step: WizardStep::SelectImage,
                message: "MessageSubmitted",
            }
        );

        wizard
            .update(WizardMessage::ImageSelected(photo()))
            .expect("select");
        let err = wizard
            .update(WizardMessage::ImageSelected(photo()))
            .expect_err("already selected");
        assert!(matches!(err, WizardError::UnexpectedMessage { .. }));
        assert_eq!(wizard.state().step(), WizardStep::ComposeMessage);
    }

    #[test]
    fn reselecting_after_back_replaces_the_photo() {
        let mut wizard = wizard();
        wizard
            .update(WizardMessage::ImageSelected(photo()))
            .expect("select");
        wizard.update(WizardMessage::Back).expect("back");

        let other = PhotoResult {
            id: PhotoId(99),
            photographer: "Kenji".into(),
            ..photo()
        };
        wizard
            .update(WizardMessage::ImageSelected(other))
            .expect("reselect");
        wizard
            .update(WizardMessage::MessageSubmitted("hi".into()))
            .expect("submit");
        assert_eq!(
            wizard.card().map(|card| card.photographer),
            Some("Kenji".to_string())
        );
    }
}
