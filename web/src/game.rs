use crate::api::HttpApi;
use ndarray::Array2;
use std::collections::HashMap;
use std::rc::Rc;
use trivia_core as trivia;
use trivia::{BoardLayout, Coord, GameConfig, RenderSurface, StartOutcome, TriviaGame};
use yew::html::Scope;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Click(Coord),
    Header(Vec<AttrValue>),
    Body(Array2<trivia::BodyCell>),
    UpdateCell(Coord, AttrValue),
    Loading(bool),
    StartEnabled(bool),
}

/// Forwards everything the game draws to [`GameView`] as messages.
pub(crate) struct LinkSurface {
    link: Scope<GameView>,
}

impl RenderSurface for LinkSurface {
    fn render_header(&self, titles: &[String]) {
        let titles = titles.iter().cloned().map(AttrValue::from).collect();
        self.link.send_message(Msg::Header(titles));
    }

    fn render_body(&self, layout: &BoardLayout) {
        self.link.send_message(Msg::Body(layout.body.clone()));
    }

    fn update_cell(&self, coord: Coord, html: &str) {
        self.link
            .send_message(Msg::UpdateCell(coord, AttrValue::from(html.to_string())));
    }

    fn set_loading(&self, loading: bool) {
        self.link.send_message(Msg::Loading(loading));
    }

    fn set_start_enabled(&self, enabled: bool) {
        self.link.send_message(Msg::StartEnabled(enabled));
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    coord: Coord,
    placeholder: &'static str,
    #[prop_or_default]
    html: Option<AttrValue>,
    callback: Callback<Coord>,
}

#[function_component(ClueCell)]
fn clue_cell(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        coord,
        placeholder,
        html,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{} clicked", coord);
        callback.emit(coord);
    });

    match html {
        Some(html) => html! {
            <td class="revealed" {onclick}>{Html::from_html_unchecked(html)}</td>
        },
        None => html! {
            <td {onclick}>{placeholder}</td>
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: GameConfig,
    pub seed: u64,
}

fn start_label(start_enabled: bool, has_board: bool) -> &'static str {
    match (start_enabled, has_board) {
        (false, _) => "Loading…",
        (true, false) => "Start",
        (true, true) => "Restart",
    }
}

pub(crate) struct GameView {
    game: Rc<TriviaGame<HttpApi, LinkSurface>>,
    header: Vec<AttrValue>,
    body: Option<Array2<trivia::BodyCell>>,
    revealed: HashMap<Coord, AttrValue>,
    loading: bool,
    start_enabled: bool,
}

impl GameView {
    fn start(&self) {
        let game = Rc::clone(&self.game);
        wasm_bindgen_futures::spawn_local(async move {
            match game.start().await {
                Ok(StartOutcome::Ready { categories }) => {
                    log::debug!("board ready with {} categories", categories)
                }
                Ok(StartOutcome::Busy) => log::debug!("start ignored, setup in progress"),
                Err(err) => log::error!("Could not set up game: {}", err),
            }
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        let api = HttpApi::new(config.api_base.clone());
        let surface = LinkSurface {
            link: ctx.link().clone(),
        };
        Self {
            game: Rc::new(TriviaGame::new(config, seed, api, surface)),
            header: Vec::new(),
            body: None,
            revealed: HashMap::new(),
            loading: false,
            start_enabled: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.start();
                false
            }
            Click(coord) => {
                self.game.click(coord);
                false
            }
            Header(header) => {
                self.header = header;
                true
            }
            Body(body) => {
                self.body = Some(body);
                self.revealed.clear();
                true
            }
            UpdateCell(coord, html) => {
                self.revealed.insert(coord, html);
                true
            }
            Loading(loading) => {
                let changed = self.loading != loading;
                self.loading = loading;
                changed
            }
            StartEnabled(enabled) => {
                let changed = self.start_enabled != enabled;
                self.start_enabled = enabled;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });
        let label = start_label(self.start_enabled, self.body.is_some());

        html! {
            <div class="trivia">
                <nav>
                    <button onclick={cb_start} disabled={!self.start_enabled}>{label}</button>
                    <span class="loading" aria-busy={self.loading.to_string()} hidden={!self.loading}/>
                </nav>
                <table>
                    <thead>
                        <tr>
                            {
                                for self.header.iter().map(|title| html! {
                                    <th>{Html::from_html_unchecked(title.clone())}</th>
                                })
                            }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.body.iter().flat_map(|body| body.rows()).map(|row| html! {
                                <tr>
                                    {
                                        for row.iter().map(|cell| {
                                            let coord = cell.coord;
                                            let placeholder = cell.text;
                                            let html = self.revealed.get(&coord).cloned();
                                            let callback = ctx.link().callback(Msg::Click);
                                            html! {
                                                <ClueCell {coord} {placeholder} {html} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}
