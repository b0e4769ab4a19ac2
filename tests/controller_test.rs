//! Tests for the game controller and its render notifications.

use noughts_and_crosses::{
    Cell, GameController, Mark, Mode, Opening, Player, RenderEvent, SessionState,
};

type Controller = GameController<Vec<RenderEvent>>;

fn human(mark: Mark) -> Player {
    Player::new(mark)
}

fn computer(mark: Mark) -> Player {
    Player {
        mark,
        is_computer_controlled: true,
    }
}

fn started(mode: Mode, human_choice: Mark) -> Controller {
    let mut controller = GameController::with_seed(Vec::new(), 7).with_opening(Opening::Search);
    controller.start_game(mode, human_choice);
    controller
}

fn play_all(controller: &mut Controller, moves: &[usize]) {
    for &index in moves {
        controller.apply_move(index);
    }
}

#[test]
fn test_idle_controller_ignores_moves() {
    let mut controller: Controller = GameController::with_seed(Vec::new(), 1);
    controller.on_cell_activated(4);

    assert_eq!(controller.session().state(), SessionState::Idle);
    assert_eq!(controller.session().board().empty_count(), 9);
    assert!(controller.renderer().is_empty());
    assert_eq!(controller.suggest_move(), None);
}

#[test]
fn test_start_clears_and_prompts_cross() {
    let controller = started(Mode::HumanVsHuman, Mark::Cross);
    assert_eq!(
        controller.renderer().as_slice(),
        &[RenderEvent::Cleared, RenderEvent::TurnPrompt(human(Mark::Cross))]
    );
    assert_eq!(controller.session().state(), SessionState::InProgress);
}

#[test]
fn test_human_vs_human_alternates() {
    let mut controller = started(Mode::HumanVsHuman, Mark::Cross);
    controller.apply_move(0);
    controller.apply_move(4);

    let board = controller.session().board();
    assert_eq!(board.get(0), Some(Cell::Occupied(Mark::Cross)));
    assert_eq!(board.get(4), Some(Cell::Occupied(Mark::Nought)));
    assert_eq!(controller.session().current_player(), human(Mark::Cross));
    assert_eq!(
        &controller.renderer()[2..],
        &[
            RenderEvent::Move { index: 0, player: human(Mark::Cross) },
            RenderEvent::TurnPrompt(human(Mark::Nought)),
            RenderEvent::Move { index: 4, player: human(Mark::Nought) },
            RenderEvent::TurnPrompt(human(Mark::Cross)),
        ]
    );
}

#[test]
fn test_occupied_and_out_of_range_cells_are_ignored() {
    let mut controller = started(Mode::HumanVsHuman, Mark::Cross);
    controller.apply_move(4);
    let events = controller.renderer().len();

    controller.apply_move(4);
    controller.apply_move(9);
    controller.apply_move(usize::MAX);

    assert_eq!(controller.renderer().len(), events);
    assert_eq!(controller.session().board().empty_count(), 8);
    assert_eq!(controller.session().current_player(), human(Mark::Nought));
}

#[test]
fn test_win_reports_line_without_move() {
    let mut controller = started(Mode::HumanVsHuman, Mark::Cross);
    play_all(&mut controller, &[0, 3, 1, 4, 2]);

    assert_eq!(controller.session().state(), SessionState::Ended);
    let events = controller.renderer();
    assert_eq!(
        events.last(),
        Some(&RenderEvent::Win { line: [0, 1, 2], player: human(Mark::Cross) })
    );
    assert!(!events.contains(&RenderEvent::Move { index: 2, player: human(Mark::Cross) }));
    assert!(!events.contains(&RenderEvent::Tie));
}

#[test]
fn test_tie_reports_move_then_tie() {
    let mut controller = started(Mode::HumanVsHuman, Mark::Cross);
    play_all(&mut controller, &[0, 4, 2, 1, 7, 5, 3, 6, 8]);

    assert_eq!(controller.session().state(), SessionState::Ended);
    assert!(controller.session().board().is_full());
    assert_eq!(controller.session().board().winning_line(), None);

    let events = controller.renderer();
    assert_eq!(
        &events[events.len() - 2..],
        &[
            RenderEvent::Move { index: 8, player: human(Mark::Cross) },
            RenderEvent::Tie,
        ]
    );
    assert!(!events.iter().any(|e| matches!(e, RenderEvent::Win { .. })));
}

#[test]
fn test_ended_game_ignores_moves() {
    let mut controller = started(Mode::HumanVsHuman, Mark::Cross);
    play_all(&mut controller, &[0, 3, 1, 4, 2]);
    let events = controller.renderer().len();

    controller.apply_move(8);

    assert_eq!(controller.renderer().len(), events);
    assert!(controller.session().board().is_empty(8));
    assert_eq!(controller.suggest_move(), None);
}

#[test]
fn test_restart_discards_game_in_progress() {
    let mut controller = started(Mode::HumanVsHuman, Mark::Cross);
    play_all(&mut controller, &[0, 4, 8]);

    controller.on_start_requested(Mode::HumanVsHuman, Mark::Cross);
    controller.on_start_requested(Mode::HumanVsHuman, Mark::Cross);

    assert_eq!(controller.session().board().empty_count(), 9);
    assert_eq!(controller.session().state(), SessionState::InProgress);
    assert_eq!(controller.session().current_player(), human(Mark::Cross));
    assert_eq!(controller.renderer().last(), Some(&RenderEvent::TurnPrompt(human(Mark::Cross))));
}

#[test]
fn test_computer_replies_before_returning() {
    let mut controller = started(Mode::HumanVsComputer, Mark::Cross);

    controller.on_cell_activated(0);
    assert_eq!(controller.session().board().get(4), Some(Cell::Occupied(Mark::Nought)));
    assert_eq!(controller.session().current_player(), human(Mark::Cross));

    controller.on_cell_activated(1);
    assert_eq!(controller.session().board().get(2), Some(Cell::Occupied(Mark::Nought)));
    assert_eq!(controller.session().board().empty_count(), 5);
    assert_eq!(
        controller.renderer().last(),
        Some(&RenderEvent::TurnPrompt(human(Mark::Cross)))
    );
}

#[test]
fn test_computer_cross_opens_by_search() {
    let controller = started(Mode::HumanVsComputer, Mark::Nought);

    assert_eq!(controller.session().board().get(0), Some(Cell::Occupied(Mark::Cross)));
    assert_eq!(
        controller.renderer().as_slice(),
        &[
            RenderEvent::Cleared,
            RenderEvent::TurnPrompt(computer(Mark::Cross)),
            RenderEvent::Move { index: 0, player: computer(Mark::Cross) },
            RenderEvent::TurnPrompt(human(Mark::Nought)),
        ]
    );
}

#[test]
fn test_random_opening_is_reproducible() {
    let open = |seed| {
        let mut controller: Controller = GameController::with_seed(Vec::new(), seed);
        controller.start_game(Mode::HumanVsComputer, Mark::Nought);
        assert_eq!(controller.session().board().empty_count(), 8);
        controller.session().board().cells().to_vec()
    };
    for seed in 0..8 {
        assert_eq!(open(seed), open(seed));
    }
}

#[test]
fn test_mode_change_reassigns_control() {
    let mut controller = started(Mode::HumanVsComputer, Mark::Nought);
    controller.start_game(Mode::HumanVsHuman, Mark::Nought);

    assert_eq!(controller.session().player(Mark::Cross), human(Mark::Cross));
    assert_eq!(controller.session().player(Mark::Nought), human(Mark::Nought));
    assert_eq!(controller.session().board().empty_count(), 9);
}

/// Plays every human line against the computer and returns how many games ended.
fn explore(controller: &Controller, machine: Mark) -> usize {
    let mut finished = 0;
    for index in controller.session().board().empty_cells() {
        let mut next = controller.clone();
        next.renderer_mut().clear();
        next.apply_move(index);

        match next.renderer().last() {
            Some(RenderEvent::Win { player, .. }) => {
                assert_eq!(player.mark, machine, "human won:\n{}", next.session().board());
                assert_eq!(next.session().state(), SessionState::Ended);
                finished += 1;
            }
            Some(RenderEvent::Tie) => {
                assert_eq!(next.session().state(), SessionState::Ended);
                finished += 1;
            }
            other => {
                assert_eq!(
                    other,
                    Some(&RenderEvent::TurnPrompt(human(machine.opponent())))
                );
                finished += explore(&next, machine);
            }
        }
    }
    finished
}

#[test]
fn test_computer_never_loses_as_nought() {
    let controller = started(Mode::HumanVsComputer, Mark::Cross);
    assert!(explore(&controller, Mark::Nought) > 0);
}

#[test]
fn test_computer_never_loses_as_cross() {
    for seed in 0..4 {
        let mut controller: Controller = GameController::with_seed(Vec::new(), seed);
        controller.start_game(Mode::HumanVsComputer, Mark::Nought);
        assert!(explore(&controller, Mark::Cross) > 0);
    }
}
