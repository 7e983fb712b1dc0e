use crate::board::{BoardMsg, StatsMsg};
use crate::game::{GameView, Msg};
use gloo::timers::callback::Timeout;
use pairflip_core::{
    BoardRenderer, Card, CardId, GameConfig, ResolveTask, Scheduler, StatsDisplay,
};
use yew::html::Scope;

/// Forwards board signals to the component as messages.
pub(crate) struct BoardLink(pub Scope<GameView>);

impl BoardRenderer for BoardLink {
    fn render_board(&mut self, cards: &[Card], config: GameConfig) {
        self.0
            .send_message(Msg::Board(BoardMsg::Render(cards.to_vec(), config)));
    }

    fn set_face_up(&mut self, id: CardId) {
        self.0.send_message(Msg::Board(BoardMsg::FaceUp(id)));
    }

    fn set_face_down(&mut self, id: CardId) {
        self.0.send_message(Msg::Board(BoardMsg::FaceDown(id)));
    }

    fn set_matched(&mut self, id: CardId) {
        self.0.send_message(Msg::Board(BoardMsg::Matched(id)));
    }

    fn layout_changed(&mut self, config: GameConfig) {
        self.0.send_message(Msg::Board(BoardMsg::Layout(config)));
    }
}

pub(crate) struct StatsLink(pub Scope<GameView>);

impl StatsDisplay for StatsLink {
    fn update_moves(&mut self, moves: u32) {
        self.0.send_message(Msg::Stats(StatsMsg::Moves(moves)));
    }

    fn update_matches(&mut self, matches: u32) {
        self.0.send_message(Msg::Stats(StatsMsg::Matches(matches)));
    }

    fn announce_win(&mut self, moves_taken: u32) {
        self.0.send_message(Msg::Stats(StatsMsg::Won(moves_taken)));
    }
}

/// Runs resolve tasks on browser timeouts. A task outliving its game is
/// rejected by the engine, so timeouts are never cancelled.
pub(crate) struct TimerLink(pub Scope<GameView>);

impl Scheduler for TimerLink {
    fn schedule_after(&mut self, delay_ms: u32, task: ResolveTask) {
        let link = self.0.clone();
        Timeout::new(delay_ms, move || link.send_message(Msg::Resolve(task))).forget();
    }
}
