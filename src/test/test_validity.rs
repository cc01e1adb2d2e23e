#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn well_formed_level_passes_every_check() {
        let game = GameTestState::new(r#"
#####
#@$.#
#####
"#);
        let validity = check_level_validity(&game.game_state, Some((3, 5)));

        assert!(validity.is_valid());
        assert_eq!(validate_level(&game.game_state, Some((3, 5))), Ok(()));
    }

    #[test]
    fn checks_are_reported_independently() {
        let game = GameTestState::new(r#"
######
#@$..@
######
"#);
        let validity = check_level_validity(&game.game_state, Some((3, 5)));

        assert_eq!(validity, LevelValidity {
            dimension: false,
            player_count: false,
            crate_storage_count: false,
        });
        assert!(!validity.is_valid());
    }

    #[test]
    fn validate_level_reports_first_failure() {
        let game = GameTestState::new(r#"
######
#@$..@
######
"#);
        assert_eq!(
            validate_level(&game.game_state, Some((3, 5))),
            Err(LevelError::DimensionMismatch { rows: 3, cols: 5, actual_rows: 3, actual_cols: 6 })
        );
        assert_eq!(validate_level(&game.game_state, None), Err(LevelError::MultiplePlayers(2)));
    }

    #[test]
    fn crates_on_storage_and_player_on_storage_are_counted() {
        let game = GameTestState::new(r#"
#######
#+$* $#
#######
"#);
        assert_eq!(game.game_state.count_crates(), 3);
        assert_eq!(game.game_state.count_storage(), 2);
        assert_eq!(
            validate_level(&game.game_state, None),
            Err(LevelError::CrateStorageMismatch { crates: 3, storage: 2 })
        );
    }

    #[test]
    fn ragged_rows_are_padded_with_empty_cells() {
        let game = GameTestState::new(r#"
###
#@$.#
#
"#);
        let grid = &game.game_state.grid;

        assert_eq!((grid.rows(), grid.cols()), (3, 5));
        assert_eq!(game.game_state.cell(&Vec2 { i: 0, j: 4 }), Some(Cell::Empty));
        assert_eq!(game.game_state.cell(&Vec2 { i: 2, j: 1 }), Some(Cell::Empty));
        assert_eq!(game.game_state.player, Vec2 { i: 1, j: 1 });
    }

    #[test]
    fn level_errors_have_readable_messages() {
        assert_eq!(LevelError::NoPlayer.to_string(), "level has no player");
        assert_eq!(
            LevelError::CrateStorageMismatch { crates: 2, storage: 3 }.to_string(),
            "level has 2 crates but 3 storage locations"
        );
    }
}
