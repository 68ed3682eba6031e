//! Central button construction helpers ensuring consistent style.
use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;

pub struct Btn;
impl Btn {
    pub fn primary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Primary)
    }
    /// Primary button that greys out when the action has nowhere to go.
    pub fn pager(id: &str, label: &str, enabled: bool) -> CreateButton {
        Self::primary(id, label).disabled(!enabled)
    }
}
