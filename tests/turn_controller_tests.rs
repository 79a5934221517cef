//! Turn controller tests.
//!
//! These tests drive rigged hands through the public transitions:
//! - Rotation and the round counter
//! - Triplet, quad and win claims on a discard
//! - Concealed and upgraded quads with replacement draws
//! - Refused requests leaving the state untouched

use gap_five::engine::{try_declare_quad, try_discard, try_draw, try_respond};
use gap_five::tiles::{parse_kinds, rig_deck, MeldKind, TileId, TileKind};
use gap_five::{GameState, Outcome, Rejection, Response, Seat, Table, TurnStep, WinKind};

/// Thirteen distinct kinds; three copies of this hand never claim or win.
const JUNK: &str = "1D 3D 5D 7D 9D 2B 4B 6B 8B Red Green White 1B";

fn rigged(hands: [&str; 3], draws: &str, replacements: &str) -> GameState {
    let hands = hands.map(|h| parse_kinds(h).unwrap());
    let deck = rig_deck(
        [&hands[0], &hands[1], &hands[2]],
        &parse_kinds(draws).unwrap(),
        &parse_kinds(replacements).unwrap(),
    )
    .unwrap();
    Table::default().new_hand_from_deck(&deck)
}

/// Id of a held tile of the given kind.
fn held(state: &GameState, seat: Seat, kind: TileKind) -> TileId {
    state
        .player(seat)
        .hand
        .iter()
        .find(|t| t.is(kind))
        .map(|t| t.id)
        .expect("tile should be held")
}

/// Draw and throw straight back the drawn tile.
fn draw_and_throw(state: &GameState, seat: Seat) -> GameState {
    let drawn = try_draw(state, seat).unwrap();
    let tile = drawn.player(seat).last_drawn.unwrap();
    try_discard(&drawn, seat, tile).unwrap()
}

#[test]
fn test_rotation_and_round_counter() {
    let mut state = rigged([JUNK, JUNK, JUNK], "", "");
    let expected = [
        (Seat::Upper, 1),
        (Seat::Lower, 1),
        (Seat::Human, 1),
        (Seat::Upper, 2),
        (Seat::Lower, 2),
        (Seat::Human, 2),
        (Seat::Upper, 3),
    ];

    for (seat, round) in expected {
        assert_eq!(state.step(), TurnStep::AwaitingDraw(seat));
        assert_eq!(state.round, round);
        state = draw_and_throw(&state, seat);
        assert!(state.conserves_tiles());
    }
    assert_eq!(state.history.len(), 14);
}

const TRIPLET_UPPER: &str = "Red 1D 3D 5D 7D 9D 2B 4B 6B 8B Green White 1B";
const TRIPLET_LOWER: &str = "2D 4D 6D 8D 1B 3B 5B 7B 9B Green White 3D 5D";
const TRIPLET_HUMAN: &str = "Red Red 2D 4D 6D 8D 3B 5B 7B 9B 1D 9D Green";

#[test]
fn test_triplet_claim_hands_over_turn() {
    let state = rigged([TRIPLET_UPPER, TRIPLET_LOWER, TRIPLET_HUMAN], "White", "");
    let drawn = try_draw(&state, Seat::Upper).unwrap();
    let red = held(&drawn, Seat::Upper, TileKind::RED);
    let discarded = try_discard(&drawn, Seat::Upper, red).unwrap();

    let pending = discarded.pending.clone().unwrap();
    assert_eq!(pending.responder, Seat::Human);
    assert_eq!(pending.options.as_slice(), &[Response::Triplet, Response::Pass]);
    assert_eq!(discarded.active_seat(), Seat::Human);

    let claimed = try_respond(&discarded, Seat::Human, Response::Triplet).unwrap();
    let human = claimed.player(Seat::Human);
    assert_eq!(human.melds.len(), 1);
    assert_eq!(human.melds[0].kind, MeldKind::Triplet);
    assert_eq!(human.melds[0].claimed.unwrap().from, Seat::Upper);
    assert_eq!(human.hand.len(), 11);
    assert!(claimed.player(Seat::Upper).discards.is_empty());
    assert_eq!(claimed.step(), TurnStep::AwaitingDiscard(Seat::Human));
    assert_eq!(claimed.round, 1);
    assert_eq!(claimed.deck.len(), 44);
    assert!(claimed.conserves_tiles());
}

#[test]
fn test_pass_resumes_rotation_from_discarder() {
    let state = rigged([TRIPLET_UPPER, TRIPLET_LOWER, TRIPLET_HUMAN], "White", "");
    let drawn = try_draw(&state, Seat::Upper).unwrap();
    let red = held(&drawn, Seat::Upper, TileKind::RED);
    let discarded = try_discard(&drawn, Seat::Upper, red).unwrap();

    let passed = try_respond(&discarded, Seat::Human, Response::Pass).unwrap();
    assert!(passed.pending.is_none());
    assert_eq!(passed.step(), TurnStep::AwaitingDraw(Seat::Lower));
    assert_eq!(passed.player(Seat::Upper).discards.len(), 1);
}

#[test]
fn test_only_responder_may_answer() {
    let state = rigged([TRIPLET_UPPER, TRIPLET_LOWER, TRIPLET_HUMAN], "White", "");
    let drawn = try_draw(&state, Seat::Upper).unwrap();
    let red = held(&drawn, Seat::Upper, TileKind::RED);
    let discarded = try_discard(&drawn, Seat::Upper, red).unwrap();

    assert_eq!(
        try_respond(&discarded, Seat::Lower, Response::Pass),
        Err(Rejection::NotActive { seat: Seat::Lower, active: Seat::Human })
    );
    assert_eq!(
        try_draw(&discarded, Seat::Lower),
        Err(Rejection::NotActive { seat: Seat::Lower, active: Seat::Human })
    );
    assert_eq!(
        try_respond(&discarded, Seat::Human, Response::Win),
        Err(Rejection::ResponseNotOffered { response: Response::Win })
    );
}

#[test]
fn test_upgraded_quad_after_claim() {
    let state = rigged(
        [TRIPLET_UPPER, TRIPLET_LOWER, TRIPLET_HUMAN],
        "White 2B 4B Red",
        "Green",
    );
    let drawn = try_draw(&state, Seat::Upper).unwrap();
    let red = held(&drawn, Seat::Upper, TileKind::RED);
    let discarded = try_discard(&drawn, Seat::Upper, red).unwrap();
    let claimed = try_respond(&discarded, Seat::Human, Response::Triplet).unwrap();

    let nine = held(&claimed, Seat::Human, TileKind::dots(9));
    let state = try_discard(&claimed, Seat::Human, nine).unwrap();
    assert_eq!(state.step(), TurnStep::AwaitingDraw(Seat::Upper));
    assert_eq!(state.round, 2);

    let state = draw_and_throw(&state, Seat::Upper);
    let state = draw_and_throw(&state, Seat::Lower);
    let state = try_draw(&state, Seat::Human).unwrap();

    let upgraded = try_declare_quad(&state, Seat::Human, TileKind::RED).unwrap();
    let human = upgraded.player(Seat::Human);
    assert_eq!(human.melds.len(), 1);
    assert_eq!(human.melds[0].kind, MeldKind::UpgradedQuad);
    assert_eq!(human.melds[0].len(), 4);
    assert_eq!(human.count_of(TileKind::GREEN), 2);
    assert_eq!(upgraded.step(), TurnStep::AwaitingDiscard(Seat::Human));
    assert!(upgraded.conserves_tiles());
}

#[test]
fn test_open_quad_claim_draws_replacement() {
    let human = "Red Red Red 2D 4D 6D 8D 3B 5B 7B 9B 1D 9D";
    let state = rigged([TRIPLET_UPPER, TRIPLET_LOWER, human], "White", "White");
    let drawn = try_draw(&state, Seat::Upper).unwrap();
    let red = held(&drawn, Seat::Upper, TileKind::RED);
    let discarded = try_discard(&drawn, Seat::Upper, red).unwrap();

    let pending = discarded.pending.clone().unwrap();
    assert_eq!(pending.options.as_slice(), &[Response::Quad, Response::Pass]);

    let table = Table::default();
    assert_eq!(table.respond(&discarded, Response::Triplet), discarded);

    let claimed = table.respond(&discarded, Response::Quad);
    let player = claimed.player(Seat::Human);
    assert_eq!(player.melds[0].kind, MeldKind::OpenQuad);
    assert_eq!(player.hand.len(), 11);
    assert_eq!(player.count_of(TileKind::WHITE), 1);
    assert_eq!(claimed.deck.len(), 43);
    assert_eq!(claimed.step(), TurnStep::AwaitingDiscard(Seat::Human));
    assert!(claimed.conserves_tiles());
}

#[test]
fn test_win_on_discard() {
    let upper = "Red 1D 3D 5D 7D 9D 2B 4B 5B 8B White 1B 3B";
    let lower = "1D 3D 5D 7D 9D 1B 5B 7B White 2D 4D 6D 8D";
    let human = "2B 3B 4B 6B 7B 8B 9B 9B 9B Green Green Red Red";
    let state = rigged([upper, lower, human], "White", "");

    let drawn = try_draw(&state, Seat::Upper).unwrap();
    let red = held(&drawn, Seat::Upper, TileKind::RED);
    let discarded = try_discard(&drawn, Seat::Upper, red).unwrap();
    assert_eq!(discarded.pending.as_ref().unwrap().best(), Response::Win);

    let won = try_respond(&discarded, Seat::Human, Response::Win).unwrap();
    assert!(won.is_finished());
    assert_eq!(won.winner(), Some(Seat::Human));
    match won.outcome.as_ref().unwrap() {
        Outcome::Win(win) => {
            assert_eq!(win.kind, WinKind::OnDiscard { from: Seat::Upper });
            assert_eq!(win.hand.len(), 14);
        }
        Outcome::Exhausted => panic!("expected a win"),
    }
    assert!(won.conserves_tiles());
    assert_eq!(try_draw(&won, Seat::Lower), Err(Rejection::GameFinished));
}

#[test]
fn test_self_drawn_win() {
    let upper = "2D 2D 2D 4D 4D 4D 6D 6D 6D 3B 3B 3B 8D";
    let state = rigged([upper, JUNK, JUNK], "8D", "");

    let won = try_draw(&state, Seat::Upper).unwrap();
    assert_eq!(won.winner(), Some(Seat::Upper));
    assert!(matches!(
        won.step(),
        TurnStep::Finished(Outcome::Win(ref win)) if win.kind == WinKind::SelfDrawn
    ));
}

#[test]
fn test_concealed_quad_replacement_can_win() {
    let upper = "White White White White 2B 3B 4B 6B 7B 8B Red Red 1D";
    let other = "1D 3D 5D 7D 9D 2B 4B 6B 8B Red Green 1B 5B";
    let state = rigged([upper, other, other], "2D", "3D");

    let drawn = try_draw(&state, Seat::Upper).unwrap();
    assert!(!drawn.is_finished());
    assert_eq!(drawn.step(), TurnStep::AwaitingDiscard(Seat::Upper));

    let won = try_declare_quad(&drawn, Seat::Upper, TileKind::WHITE).unwrap();
    assert_eq!(won.winner(), Some(Seat::Upper));
    assert_eq!(won.player(Seat::Upper).melds[0].kind, MeldKind::ConcealedQuad);
    match won.outcome.as_ref().unwrap() {
        Outcome::Win(win) => {
            assert_eq!(win.kind, WinKind::SelfDrawn);
            assert_eq!(win.hand.len(), 11);
        }
        Outcome::Exhausted => panic!("expected a win"),
    }
    assert!(won.conserves_tiles());
}
