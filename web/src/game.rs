use clap::Args;
use trivito_core::{title_case, Board, CellCoord, Col, RevealState, Row};
use yew::prelude::*;

use crate::api::{ApiClient, LoadError};
use crate::theme::Theme;
use crate::utils::js_random_seed;

/// What the single control button currently offers.
#[derive(Copy, Clone, Debug, PartialEq)]
enum ControlState {
    Start,
    Restart,
    Loading,
}

impl ControlState {
    const fn label(self) -> &'static str {
        use ControlState::*;
        match self {
            Start => "Start",
            Restart => "Restart",
            Loading => "Loading…",
        }
    }

    const fn is_locked(self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug)]
pub(crate) enum Msg {
    StartGame,
    BoardLoaded {
        generation: u32,
        result: Result<Board, LoadError>,
    },
    CellClicked(CellCoord),
    CycleTheme,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the clue API base URL
    #[arg(short, long)]
    pub api: Option<String>,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    col: Col,
    row: Row,
    reveal: RevealState,
    question: AttrValue,
    answer: AttrValue,
    callback: Callback<CellCoord>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use RevealState::*;

    let CellProps {
        col,
        row,
        reveal,
        question,
        answer,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        match reveal {
            Hidden => classes!(),
            Question => classes!("question"),
            Answer => classes!("answer", "done"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        callback.emit((col, row));
        log::trace!("({}, {}) clicked", col, row);
    });

    let text = match reveal {
        Hidden => AttrValue::Static("?"),
        Question => question,
        Answer => answer,
    };

    html! {
        <td {class} {onclick}>{ text }</td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    api: ApiClient,
    board: Option<Board>,
    loading: bool,
    load_error: Option<String>,
    load_generation: u32,
    theme: Theme,
    forced_seed: Option<u64>,
}

impl GameView {
    fn control_state(&self) -> ControlState {
        if self.loading {
            ControlState::Loading
        } else if self.board.is_some() {
            ControlState::Restart
        } else {
            ControlState::Start
        }
    }

    /// Results tagged with an older generation belong to an abandoned load.
    fn is_current(&self, generation: u32) -> bool {
        generation == self.load_generation
    }

    fn begin_load(&mut self, ctx: &Context<Self>) {
        let generation = self.load_generation.wrapping_add(1);
        self.load_generation = generation;
        self.loading = true;
        self.load_error = None;
        // the old board and its handlers go away before the new one exists
        self.board = None;

        let seed = self.forced_seed.unwrap_or_else(js_random_seed);
        let api = self.api.clone();
        let link = ctx.link().clone();
        log::debug!("loading board, generation {} seed {}", generation, seed);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api.load_board(seed).await;
            link.send_message(Msg::BoardLoaded { generation, result });
        });
    }

    fn reveal_cell(&mut self, coords: CellCoord) -> bool {
        if self.loading {
            return false;
        }
        self.board
            .as_mut()
            .map_or(false, |board| board.reveal_at(coords).has_update())
    }

    fn view_board(&self, ctx: &Context<Self>, board: &Board) -> Html {
        let (cols, rows) = board.size();

        html! {
            <table class="board">
                <thead>
                    <tr>
                        {
                            for board.categories().iter().map(|category| html! {
                                <th>{ title_case(category.title()) }</th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let callback = ctx.link().callback(Msg::CellClicked);
                                        match board.clue_at((col, row)) {
                                            Some(clue) => {
                                                let reveal = clue.state();
                                                let question = AttrValue::from(clue.question().to_string());
                                                let answer = AttrValue::from(clue.answer().to_string());
                                                html! {
                                                    <CellView {col} {row} {reveal} {question} {answer} {callback}/>
                                                }
                                            }
                                            None => html! { <td/> },
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            api: props
                .api
                .as_deref()
                .map_or_else(ApiClient::default, ApiClient::new),
            board: None,
            loading: false,
            load_error: None,
            load_generation: 0,
            theme: Theme::init(),
            forced_seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartGame => {
                if self.loading {
                    false
                } else {
                    self.begin_load(ctx);
                    true
                }
            }
            BoardLoaded { generation, result } => {
                if !self.is_current(generation) {
                    log::debug!("discarding stale load result, generation {}", generation);
                    return false;
                }
                self.loading = false;
                match result {
                    Ok(board) => {
                        log::debug!("board loaded");
                        self.board = Some(board);
                    }
                    Err(err) => {
                        log::error!("board load failed: {}", err);
                        self.load_error = Some(err.to_string());
                    }
                }
                true
            }
            CellClicked(coords) => self.reveal_cell(coords),
            CycleTheme => {
                self.theme = self.theme.next();
                self.theme.apply();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let control = self.control_state();
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            StartGame
        });
        let cb_theme = ctx.link().callback(|_| CycleTheme);

        html! {
            <div class="trivito">
                <small onclick={cb_theme}>{"◐"}</small>
                <nav>
                    <span>
                        <button disabled={control.is_locked()} onclick={cb_start}>
                            { control.label() }
                        </button>
                    </span>
                </nav>
                if let Some(message) = &self.load_error {
                    <p class="error">{ message.clone() }</p>
                }
                if self.loading {
                    <div class="spinner"/>
                }
                if let Some(board) = &self.board {
                    { self.view_board(ctx, board) }
                }
            </div>
        }
    }
}
