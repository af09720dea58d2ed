use serde::{Deserialize, Serialize};

fn default_bullet() -> String {
    "■".to_string()
}

fn default_show_tips() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// Marker printed before each definition
    #[serde(default = "default_bullet")]
    pub bullet: String,
    #[serde(default = "default_show_tips")]
    pub show_tips: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bullet: default_bullet(),
            show_tips: default_show_tips(),
        }
    }
}
