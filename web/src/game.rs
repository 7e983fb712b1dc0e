use crate::board::*;
use crate::host::{BoardLink, StatsLink, TimerLink};
use crate::settings::{Settings, SettingsBar};
use crate::theme::Theme;
use crate::utils::*;
use clap::Args;
use pairflip_core::{CardId, Difficulty, MemoryEngine, ResolveTask};
use yew::prelude::*;

pub(crate) type Engine = MemoryEngine<BoardLink, StatsLink, TimerLink>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Restart,
    SetDifficulty(Difficulty),
    SetTheme(Theme),
    SelectCard(CardId),
    Resolve(ResolveTask),
    Board(BoardMsg),
    Stats(StatsMsg),
}

#[derive(Args, Properties, Debug, Clone, Default, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board preset to use instead of the stored one
    #[arg(short, long)]
    difficulty: Option<String>,
}

#[cfg(test)]
impl GameProps {
    pub(crate) fn new_for_test(seed: Option<u64>, difficulty: Option<&str>) -> Self {
        Self {
            seed,
            difficulty: difficulty.map(str::to_owned),
        }
    }
}

pub(crate) struct GameView {
    settings: Settings,
    theme: Theme,
    engine: Engine,
    board: BoardModel,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut settings: Settings = LocalOrDefault::local_or_default();
        if let Some(name) = &props.difficulty {
            settings.difficulty = Difficulty::parse_or_default(name);
        }

        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let link = ctx.link();
        let mut engine = Engine::new(
            seed,
            BoardLink(link.clone()),
            StatsLink(link.clone()),
            TimerLink(link.clone()),
        );
        engine.configure_difficulty(settings.difficulty);

        Self {
            settings,
            theme: Theme::init(),
            board: BoardModel::new(engine.config()),
            engine,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.engine.start();
                false
            }
            Restart => {
                self.engine.restart();
                false
            }
            SetDifficulty(difficulty) => {
                if self.settings.difficulty != difficulty {
                    self.settings.difficulty = difficulty;
                    self.settings.local_save();
                }
                self.engine.configure_difficulty(difficulty);
                true
            }
            SetTheme(theme) => {
                self.theme = theme;
                theme.apply();
                true
            }
            SelectCard(id) => {
                let outcome = self.engine.select_card(id);
                log::debug!("select card {}: {:?}", id, outcome);
                outcome.has_update()
            }
            Resolve(task) => {
                let outcome = self.engine.resolve(task);
                log::debug!("resolve {:?}: {:?}", task.pair, outcome);
                outcome.has_update()
            }
            Board(msg) => self.board.apply_board(msg),
            Stats(msg) => self.board.apply_stats(msg),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_start = ctx.link().callback(|_: MouseEvent| Start);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);
        let on_difficulty = ctx.link().callback(SetDifficulty);
        let on_theme = ctx.link().callback(SetTheme);
        let on_card = ctx.link().callback(SelectCard);

        let columns = self.board.config.columns();
        let style = format!("grid-template-columns: repeat({columns}, 1fr)");
        let board_class = classes!(
            "board",
            self.board.grid_class(),
            self.engine.is_started().then_some("playable"),
        );
        let locked = self.engine.is_locked();
        let win_message = self.board.win_message();

        html! {
            <div class="pairflip">
                <nav>
                    <button id="startBtn" onclick={cb_start}>{"Start"}</button>
                    <button id="restartBtn" onclick={cb_restart}>{"Restart"}</button>
                    <SettingsBar
                        difficulty={self.settings.difficulty}
                        theme={self.theme}
                        {on_difficulty}
                        {on_theme}
                    />
                </nav>
                <aside class="stats">
                    <span>{"Moves: "}<strong id="moves">{self.board.moves}</strong></span>
                    <span>{"Matches: "}<strong id="matches">{self.board.matches}</strong></span>
                </aside>
                <section id="board" class={board_class} {style}>
                    {
                        match &self.board.cards {
                            None => html! {
                                <p class="placeholder">{"Press Start to begin"}</p>
                            },
                            Some(cards) => html! {
                                <>
                                    {
                                        for cards.iter().map(|card| html! {
                                            <CardView
                                                key={card.id.0}
                                                card={card.clone()}
                                                {locked}
                                                callback={on_card.clone()}
                                            />
                                        })
                                    }
                                </>
                            },
                        }
                    }
                </section>
                <p id="winMessage" class="win" hidden={win_message.is_none()}>
                    {win_message.unwrap_or_default()}
                </p>
            </div>
        }
    }
}
