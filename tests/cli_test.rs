#[cfg(feature = "std")]
mod cli_tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;
    use text_battleship::{Board, CliPlayer, GameError, Player};

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn answers_are_one_based() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut p = player("3\n7\n");
        assert_eq!(p.select_target(&mut rng, &Board::new()).unwrap(), (2, 6));
    }

    #[test]
    fn bad_answers_are_asked_again() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut out = Vec::new();
        let mut p = CliPlayer::new(Cursor::new(b"eleven\n11\n10\n1\n".to_vec()), &mut out);
        assert_eq!(p.select_target(&mut rng, &Board::new()).unwrap(), (9, 0));
        drop(p);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("X coordinate (1-10):").count(), 3);
        assert_eq!(text.matches("Y coordinate (1-10):").count(), 1);
        assert_eq!(text.matches("Error").count(), 2);
    }

    #[test]
    fn end_of_input_and_quit() {
        let mut rng = SmallRng::seed_from_u64(1);
        let err = player("4\n").select_target(&mut rng, &Board::new()).unwrap_err();
        assert!(matches!(err, GameError::InputClosed));

        let err = player("q\n").select_target(&mut rng, &Board::new()).unwrap_err();
        assert!(matches!(err, GameError::Abandoned));
    }
}
