use quiz_core::GameMode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeCardVm {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub meta: String,
}

#[must_use]
pub fn map_mode_cards() -> Vec<ModeCardVm> {
    GameMode::ALL
        .into_iter()
        .map(|mode| ModeCardVm {
            id: mode.id(),
            title: mode.title(),
            description: mode.description(),
            meta: format!("{}s · {} pts", mode.time_limit_secs(), mode.reward()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_follow_menu_order() {
        let cards = map_mode_cards();
        let ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec!["basic-calc", "math-puzzle", "inequality", "sequence", "math-memory"]
        );
        assert_eq!(cards[2].meta, "8s · 10 pts");
    }
}
