use pasur::{
    Card, Controller, Difficulty, Game, GameOptions, GameState, PlayOutcome, ScoreBreakdown,
    Standing, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(players: u8, difficulty: &str, seed: u32) -> Result<WasmGame, JsValue> {
        let options = GameOptions::default()
            .with_players(players)
            .with_difficulty(difficulty_from_str(difficulty));
        let game = Game::new(options, seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.game.deal().map(|_| ()).map_err(js_err)
    }

    pub fn play(&mut self, player_id: u8, suit: &str, rank: u8) -> Result<JsValue, JsValue> {
        let suit = suit_from_str(suit).ok_or_else(|| JsValue::from_str("unknown suit"))?;
        let outcome = self
            .game
            .play(player_id, Card::new(suit, rank))
            .map_err(js_err)?;
        to_js_value(&JsPlayOutcome::from(outcome))
    }

    pub fn play_automated(&mut self, player_id: u8) -> Result<JsValue, JsValue> {
        let outcome = self.game.play_automated(player_id).map_err(js_err)?;
        to_js_value(&JsPlayOutcome::from(outcome))
    }

    pub fn possible_takes(&self, suit: &str, rank: u8) -> Result<JsValue, JsValue> {
        let suit = suit_from_str(suit).ok_or_else(|| JsValue::from_str("unknown suit"))?;
        let takes: Vec<JsCard> = self
            .game
            .possible_takes(Card::new(suit, rank))
            .into_iter()
            .map(card_to_js)
            .collect();
        to_js_value(&takes)
    }

    pub fn leaderboard(&self) -> Result<JsValue, JsValue> {
        let standings: Vec<JsStanding> = self
            .game
            .leaderboard()
            .into_iter()
            .map(JsStanding::from)
            .collect();
        to_js_value(&standings)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let players = self
            .game
            .players()
            .iter()
            .map(|player| JsPlayer {
                id: player.id(),
                name: player.name().to_string(),
                automated: player.is_automated(),
                difficulty: match player.controller() {
                    Controller::Human => None,
                    Controller::Automated(level) => Some(difficulty_to_str(level)),
                },
                hand: if player.is_automated() {
                    Vec::new()
                } else {
                    player.hand().iter().copied().map(card_to_js).collect()
                },
                hand_size: player.hand().len() as u32,
                captured_count: player.captured().len() as u32,
                surs: player.surs(),
                score: self.game.score(player.id()).ok().map(JsBreakdown::from),
            })
            .collect();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            current_player: self.game.current_player(),
            last_taker: self.game.last_taker(),
            table: self.game.table().iter().copied().map(card_to_js).collect(),
            players,
            cards_remaining: self.game.cards_remaining() as u32,
            progress_percent: self.game.progress_percent(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    current_player: Option<u8>,
    last_taker: Option<u8>,
    table: Vec<JsCard>,
    players: Vec<JsPlayer>,
    cards_remaining: u32,
    progress_percent: u8,
}

#[derive(Serialize)]
struct JsPlayer {
    id: u8,
    name: String,
    automated: bool,
    difficulty: Option<&'static str>,
    hand: Vec<JsCard>,
    hand_size: u32,
    captured_count: u32,
    surs: u32,
    score: Option<JsBreakdown>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
struct JsPlayOutcome {
    player_id: u8,
    card: JsCard,
    captured: Vec<JsCard>,
    points: u32,
    sur: bool,
    total_points: u32,
    remainder: Vec<JsCard>,
    state: &'static str,
}

impl From<PlayOutcome> for JsPlayOutcome {
    fn from(outcome: PlayOutcome) -> Self {
        Self {
            player_id: outcome.player_id,
            card: card_to_js(outcome.card),
            total_points: outcome.total_points(),
            captured: outcome.captured.into_iter().map(card_to_js).collect(),
            points: outcome.points,
            sur: outcome.sur,
            remainder: outcome.remainder.into_iter().map(card_to_js).collect(),
            state: state_to_str(outcome.state),
        }
    }
}

#[derive(Serialize)]
struct JsBreakdown {
    ten_diamonds: u32,
    two_clubs: u32,
    aces: u32,
    jacks: u32,
    clubs_seven: u32,
    surs: u32,
    most_cards: u32,
    total: u32,
}

impl From<ScoreBreakdown> for JsBreakdown {
    fn from(breakdown: ScoreBreakdown) -> Self {
        Self {
            ten_diamonds: breakdown.ten_diamonds,
            two_clubs: breakdown.two_clubs,
            aces: breakdown.aces,
            jacks: breakdown.jacks,
            clubs_seven: breakdown.clubs_seven,
            surs: breakdown.surs,
            most_cards: breakdown.most_cards,
            total: breakdown.total,
        }
    }
}

#[derive(Serialize)]
struct JsStanding {
    player_id: u8,
    name: String,
    breakdown: JsBreakdown,
    captured_count: u32,
    surs: u32,
}

impl From<Standing> for JsStanding {
    fn from(standing: Standing) -> Self {
        Self {
            player_id: standing.player_id,
            name: standing.name,
            breakdown: JsBreakdown::from(standing.breakdown),
            captured_count: standing.captured_count as u32,
            surs: standing.surs,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn suit_from_str(suit: &str) -> Option<Suit> {
    match suit {
        "Hearts" => Some(Suit::Hearts),
        "Diamonds" => Some(Suit::Diamonds),
        "Clubs" => Some(Suit::Clubs),
        "Spades" => Some(Suit::Spades),
        _ => None,
    }
}

fn difficulty_from_str(difficulty: &str) -> Difficulty {
    match difficulty {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

fn difficulty_to_str(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "easy",
        Difficulty::Hard => "hard",
        _ => "medium",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::WaitingForDeal => "WaitingForDeal",
        GameState::Playing => "Playing",
        GameState::RoundOver => "RoundOver",
        GameState::GameOver => "GameOver",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
