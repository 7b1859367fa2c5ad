use crate::*;

/// Observable status line, updated at every phase transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ready,
    Showing {
        count: TileCount,
    },
    Shuffling,
    Guess,
    Won,
    Lost,
    Rejected(GameError),
    Failed,
}

impl Status {
    pub const fn is_rejection(self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Renders the status with the catalogue and tile bounds of `config`.
    pub fn message(self, config: &GameConfig) -> String {
        use Status::*;

        let messages = &config.messages;
        match self {
            Ready => messages.prompt.clone(),
            Showing { count } => messages.showing.replace("{count}", &count.to_string()),
            Shuffling => messages.shuffling.clone(),
            Guess => messages.guess.clone(),
            Won => messages.won.clone(),
            Lost => messages.lost.clone(),
            Rejected(GameError::Busy) => messages.busy.clone(),
            Rejected(GameError::NotANumber | GameError::TileCountOutOfRange { .. }) => messages
                .invalid_range
                .replace("{min}", &config.min_tiles.to_string())
                .replace("{max}", &config.max_tiles.to_string()),
            Rejected(_) | Failed => messages.failed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_fill_in_placeholders() {
        let config = GameConfig::default();

        assert_eq!(
            Status::Showing { count: 4 }.message(&config),
            "Showing 4 buttons…"
        );
        assert_eq!(
            Status::Rejected(GameError::NotANumber).message(&config),
            "Please enter a number between 3 and 7."
        );
        assert_eq!(
            Status::Rejected(GameError::Busy).message(&config),
            "Please wait—shuffling in progress…"
        );
        assert_eq!(Status::Won.message(&config), "Excellent memory!");
        assert_eq!(Status::Lost.message(&config), "Wrong order!");
        assert_eq!(
            Status::Failed.message(&config),
            "Unexpected error. Please try again."
        );
    }
}
