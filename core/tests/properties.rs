//! Seeded whole-game checks: random command streams against random boards.

use rand::prelude::*;
use tilesweep_core::*;

const SEEDS: u64 = 64;

fn random_coords(rng: &mut SmallRng, (rows, cols): Coord2) -> Coord2 {
    // occasionally step outside the grid to exercise the no-op path
    (rng.random_range(0..=rows), rng.random_range(0..=cols))
}

fn mine_count_around(board: &Board, coords: Coord2) -> u8 {
    board
        .neighbors(coords)
        .iter()
        .filter(|&&pos| board.tile(pos).is_some_and(Tile::is_mine))
        .count() as u8
}

fn check_invariants(game: &Game) {
    let board = game.board();

    for tile in board.tiles() {
        assert!(!(tile.is_revealed() && tile.is_flagged()), "{:?}", tile.coords());
    }

    let unrevealed = board.tiles().filter(|tile| !tile.is_revealed()).count();
    assert_eq!(unrevealed, usize::from(board.unrevealed_count()));

    let flagged = board.tiles().filter(|tile| tile.is_flagged()).count();
    assert_eq!(flagged, usize::from(board.flag_count()));

    if game.state() == GameState::Won {
        assert_eq!(board.unrevealed_count(), board.mine_count());
        assert!(board.tiles().all(|tile| tile.is_mine() || tile.is_revealed()));
    }
}

#[test]
fn adjacency_matches_mines_after_first_reveal() {
    for seed in 0..SEEDS {
        let mut game = Game::new(GameConfig::intermediate(), seed).unwrap();
        game.reveal_at((7, 7));

        let board = game.board();
        for tile in board.tiles() {
            assert_eq!(tile.adjacent_mines(), mine_count_around(board, tile.coords()));
        }
    }
}

#[test]
fn first_reveal_is_inside_a_mine_free_square() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(17);

    for seed in 0..SEEDS {
        let first = (rng.random_range(0..config.rows), rng.random_range(0..config.cols));
        let mut game = Game::new(config, seed).unwrap();

        assert_ne!(game.reveal_at(first), RevealOutcome::HitMine);

        let zone = ExclusionZone::new(first, config.exclusion_radius);
        let mines: Vec<_> = game.board().tiles().filter(|t| t.is_mine()).collect();
        assert_eq!(mines.len(), usize::from(config.mines));
        assert!(mines.iter().all(|tile| !zone.contains(tile.coords())));
    }
}

#[test]
fn zero_reveal_opens_exactly_the_region_and_its_border() {
    for seed in 0..SEEDS {
        let mut game = Game::new(GameConfig::expert(), seed).unwrap();
        game.reveal_at((8, 15));
        let board = game.board();

        // with radius 2 the opening tile always touches no mine
        assert_eq!(board.tile((8, 15)).unwrap().adjacent_mines(), 0);

        for tile in board.tiles() {
            let touches_open_zero = board.neighbors(tile.coords()).iter().any(|&pos| {
                let neighbor = board.tile(pos).unwrap();
                neighbor.is_revealed() && neighbor.adjacent_mines() == 0
            });
            let expected = tile.coords() == (8, 15) || touches_open_zero;
            assert_eq!(tile.is_revealed(), expected, "seed {seed} {:?}", tile.coords());
        }
    }
}

#[test]
fn mismatched_chord_changes_nothing() {
    for seed in 0..SEEDS {
        let mut game = Game::new(GameConfig::beginner(), seed).unwrap();
        game.reveal_at((4, 4));

        let numbered: Vec<_> = game
            .board()
            .tiles()
            .filter(|t| t.is_revealed() && t.adjacent_mines() > 0)
            .map(|t| t.coords())
            .collect();

        for coords in numbered {
            let before = game.board().clone();
            assert_eq!(game.chord_at(coords), RevealOutcome::NoChange);
            assert_eq!(game.board(), &before);
        }
    }
}

#[test]
fn random_play_keeps_invariants() {
    for seed in 0..SEEDS {
        let config = GameConfig::beginner();
        let mut game = Game::new(config, seed).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut losses = 0;

        for _ in 0..400 {
            let coords = random_coords(&mut rng, config.size());
            match rng.random_range(0..4) {
                0 => {
                    game.toggle_flag_at(coords);
                }
                1 => {
                    game.chord_at(coords);
                }
                _ => {
                    game.reveal_at(coords);
                }
            }

            losses += game
                .drain_events()
                .filter(|event| *event == GameEvent::GameLost)
                .count();
            check_invariants(&game);

            if game.is_finished() {
                break;
            }
        }

        while game.advance_loss_sequence() != LossStep::Finished {}
        losses += game
            .drain_events()
            .filter(|event| *event == GameEvent::GameLost)
            .count();

        assert_eq!(losses, usize::from(game.state() == GameState::Lost));
        if game.state() == GameState::Lost {
            assert!(game.board().tiles().filter(|t| t.is_mine()).all(Tile::is_revealed));
            assert!(game.board().tiles().all(|t| !t.is_flagged()));
        }
        check_invariants(&game);
    }
}

#[test]
fn safe_play_always_wins() {
    // reveal every safe tile in row-major order; a won game ignores the rest
    for seed in 0..SEEDS {
        let config = GameConfig::intermediate();
        let mut game = Game::new(config, seed).unwrap();
        game.reveal_at((0, 0));

        let safe: Vec<_> = game
            .board()
            .tiles()
            .filter(|t| !t.is_mine())
            .map(|t| t.coords())
            .collect();
        for coords in safe {
            game.reveal_at(coords);
        }

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.observation().state, GameState::Won);
        check_invariants(&game);
    }
}
