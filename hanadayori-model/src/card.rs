/// The three fields that fully determine a shareable card.
///
/// `photographer` and `message` may be empty; `message` may contain line
/// breaks and has no length bound of its own (the link encoder enforces a
/// ceiling on the whole URL instead).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardState {
    pub image_url: String,
    pub photographer: String,
    pub message: String,
}

impl CardState {
    pub fn new(
        image_url: impl Into<String>,
        photographer: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            photographer: photographer.into(),
            message: message.into(),
        }
    }
}
