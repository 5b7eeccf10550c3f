// Tokens panel: sub-menu navigation and color token edits

use crate::error::TokenError;
use crate::store::TokenStore;
use crate::types::TokenSubmenu;

#[derive(Debug, Clone, Default)]
pub struct TokensPanel {
    pub submenu: TokenSubmenu,
}

impl TokensPanel {
    pub fn set_submenu(&mut self, submenu: TokenSubmenu) {
        self.submenu = submenu;
    }

    // Leaving the tokens tab resets the sub-menu
    pub fn leave(&mut self) {
        self.submenu = TokenSubmenu::default();
    }

    pub fn update_color(
        &self,
        tokens: &mut TokenStore,
        category: &str,
        name: &str,
        value: String,
    ) -> Result<(), TokenError> {
        tokens.update_color_value(category, name, value)
    }
}
