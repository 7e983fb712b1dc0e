use pairflip_core::{Card, CardId, GameConfig};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ViewCardState {
    FaceDown,
    FaceUp,
    Matched,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ViewCard {
    pub id: CardId,
    pub glyph: &'static str,
    pub state: ViewCardState,
}

impl From<&Card> for ViewCard {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            glyph: card.face().glyph(),
            state: if card.is_matched() {
                ViewCardState::Matched
            } else {
                ViewCardState::FaceDown
            },
        }
    }
}

/// Board signals forwarded from the engine.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum BoardMsg {
    Render(Vec<Card>, GameConfig),
    FaceUp(CardId),
    FaceDown(CardId),
    Matched(CardId),
    Layout(GameConfig),
}

/// Counter signals forwarded from the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum StatsMsg {
    Moves(u32),
    Matches(u32),
    Won(u32),
}

/// What the page shows, rebuilt only from engine signals.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BoardModel {
    pub config: GameConfig,
    /// `None` until the first game is dealt.
    pub cards: Option<Vec<ViewCard>>,
    pub moves: u32,
    pub matches: u32,
    pub won_in: Option<u32>,
}

impl BoardModel {
    pub(crate) fn new(config: GameConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub(crate) fn grid_class(&self) -> String {
        let (columns, rows) = self.config.size;
        format!("grid-{columns}x{rows}")
    }

    pub(crate) fn win_message(&self) -> Option<String> {
        self.won_in
            .map(|moves| format!("🎉 You won in {moves} moves! 🎉"))
    }

    pub(crate) fn apply_board(&mut self, msg: BoardMsg) -> bool {
        use BoardMsg::*;
        match msg {
            Render(cards, config) => {
                self.config = config;
                self.cards = Some(cards.iter().map(ViewCard::from).collect());
                self.won_in = None;
                true
            }
            FaceUp(id) => self.set_state(id, ViewCardState::FaceUp),
            FaceDown(id) => self.set_state(id, ViewCardState::FaceDown),
            Matched(id) => self.set_state(id, ViewCardState::Matched),
            Layout(config) => {
                let changed = self.config != config;
                self.config = config;
                changed
            }
        }
    }

    pub(crate) fn apply_stats(&mut self, msg: StatsMsg) -> bool {
        use StatsMsg::*;
        match msg {
            Moves(moves) => replace_if_changed(&mut self.moves, moves),
            Matches(matches) => replace_if_changed(&mut self.matches, matches),
            Won(moves) => {
                self.won_in = Some(moves);
                true
            }
        }
    }

    fn set_state(&mut self, id: CardId, state: ViewCardState) -> bool {
        let Some(card) = self.cards.iter_mut().flatten().find(|card| card.id == id) else {
            log::warn!("signal for card {} which is not on the board", id);
            return false;
        };
        replace_if_changed(&mut card.state, state)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CardProps {
    pub card: ViewCard,
    #[prop_or_default]
    pub locked: bool,
    pub callback: Callback<CardId>,
}

#[function_component(CardView)]
pub(crate) fn card_component(props: &CardProps) -> Html {
    use ViewCardState::*;

    let CardProps {
        card,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "card",
        "memory-card",
        match card.state {
            FaceDown => classes!(),
            FaceUp => classes!("flipped"),
            Matched => classes!("flipped", "matched"),
        },
        locked.then_some("locked"),
    );

    let onclick = {
        let id = card.id;
        Callback::from(move |_: MouseEvent| {
            log::trace!("card {} clicked", id);
            callback.emit(id);
        })
    };

    html! {
        <div {class} {onclick} data-id={card.id.0.to_string()}>
            <div class="inner">
                <div class="card-face front">{"?"}</div>
                <div class="card-face back">{card.glyph}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairflip_core::{Deck, Difficulty, Face};

    fn dealt() -> BoardModel {
        let deck = Deck::from_faces(&[Face(0), Face(1), Face(0), Face(1)]).unwrap();
        let mut model = BoardModel::new(Difficulty::Easy.game_config());
        model.apply_board(BoardMsg::Render(
            deck.cards().to_vec(),
            GameConfig::new((2, 2), 2),
        ));
        model
    }

    fn state_of(model: &BoardModel, id: u8) -> ViewCardState {
        model.cards.as_ref().unwrap()[id as usize].state
    }

    #[test]
    fn render_deals_face_down_cards_and_hides_win() {
        let mut model = BoardModel::default();
        model.won_in = Some(9);
        let deck = Deck::from_faces(&[Face(2), Face(2)]).unwrap();

        assert!(model.apply_board(BoardMsg::Render(
            deck.cards().to_vec(),
            GameConfig::new((2, 1), 1),
        )));

        let cards = model.cards.as_ref().unwrap();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|card| card.state == ViewCardState::FaceDown));
        assert_eq!(cards[0].glyph, Face(2).glyph());
        assert_eq!(model.win_message(), None);
        assert_eq!(model.grid_class(), "grid-2x1");
    }

    #[test]
    fn card_signals_update_single_cards() {
        let mut model = dealt();

        assert!(model.apply_board(BoardMsg::FaceUp(CardId(1))));
        assert_eq!(state_of(&model, 1), ViewCardState::FaceUp);
        assert!(!model.apply_board(BoardMsg::FaceUp(CardId(1))));

        assert!(model.apply_board(BoardMsg::FaceDown(CardId(1))));
        assert_eq!(state_of(&model, 1), ViewCardState::FaceDown);

        assert!(model.apply_board(BoardMsg::Matched(CardId(3))));
        assert_eq!(state_of(&model, 3), ViewCardState::Matched);
        assert_eq!(state_of(&model, 0), ViewCardState::FaceDown);
    }

    #[test]
    fn signals_for_missing_cards_are_dropped() {
        let mut model = BoardModel::default();
        assert!(!model.apply_board(BoardMsg::FaceUp(CardId(0))));

        let mut model = dealt();
        assert!(!model.apply_board(BoardMsg::Matched(CardId(30))));
    }

    #[test]
    fn layout_change_only_touches_config() {
        let mut model = BoardModel::new(Difficulty::Easy.game_config());

        assert!(model.apply_board(BoardMsg::Layout(Difficulty::Hard.game_config())));
        assert_eq!(model.grid_class(), "grid-6x4");
        assert!(model.cards.is_none());
        assert!(!model.apply_board(BoardMsg::Layout(Difficulty::Hard.game_config())));
    }

    #[test]
    fn stats_signals_track_counters_and_win() {
        let mut model = dealt();

        assert!(model.apply_stats(StatsMsg::Moves(3)));
        assert!(!model.apply_stats(StatsMsg::Moves(3)));
        assert!(model.apply_stats(StatsMsg::Matches(2)));
        assert!(model.apply_stats(StatsMsg::Won(3)));

        assert_eq!((model.moves, model.matches), (3, 2));
        assert_eq!(
            model.win_message().as_deref(),
            Some("🎉 You won in 3 moves! 🎉")
        );
    }
}
