use super::player::Player;

/// A team with its roster.
///
/// `id` identifies the team inside a game and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: String,
    name: String,
    logo: String,
    players: Vec<Player>,
}

impl Team {
    pub fn new(
        id: impl Into<String>,
        players: Vec<Player>,
        name: impl Into<String>,
        logo: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo: logo.into(),
            players,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Removes the first player equal to `player`.
    ///
    /// Returns `false` when the player is not on the roster.
    pub fn remove_player(&mut self, player: &Player) -> bool {
        match self.players.iter().position(|p| p == player) {
            Some(index) => {
                self.players.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_team() {
        let team = Team::new("1", vec![], "Brazil", "logo.png");
        assert_eq!(team.id(), "1");
        assert_eq!(team.name(), "Brazil");
        assert_eq!(team.logo(), "logo.png");
        assert!(team.players().is_empty());
    }

    #[test]
    fn test_add_player() {
        let mut team = Team::new("1", vec![], "Argentina", "logo.png");
        let player = Player::new("Lionel", "Messi");
        team.add_player(player.clone());
        assert!(team.players().contains(&player));
    }

    #[test]
    fn test_remove_player() {
        let mut team = Team::new("1", vec![], "Brazil", "logo.png");
        let player = Player::new("Vini", "Junior");
        team.add_player(player.clone());
        assert!(team.remove_player(&player));
        assert!(!team.players().contains(&player));
    }

    #[test]
    fn test_remove_player_only_removes_first_match() {
        let mut team = Team::new("1", vec![], "Brazil", "logo.png");
        let player = Player::new("Rodrigo", "Goes");
        team.add_player(player.clone());
        team.add_player(Player::new("Vini", "Junior"));
        team.add_player(player.clone());

        assert!(team.remove_player(&player));
        assert_eq!(
            team.players(),
            &[Player::new("Vini", "Junior"), Player::new("Rodrigo", "Goes")]
        );
    }

    #[test]
    fn test_remove_missing_player() {
        let mut team = Team::new("1", vec![Player::new("Rodrigo", "Goes")], "Brazil", "logo.png");
        assert!(!team.remove_player(&Player::new("Neymar", "Jr")));
        assert_eq!(team.players().len(), 1);
    }

    #[test]
    fn test_players_keep_insertion_order() {
        let mut team = Team::new("1", vec![], "Brazil", "logo.png");
        team.add_player(Player::new("Rodrigo", "Goes"));
        team.add_player(Player::new("Vini", "Junior"));
        let names: Vec<String> = team.players().iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["Rodrigo Goes", "Vini Junior"]);
    }
}
