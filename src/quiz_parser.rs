use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::language_utils::TranslationLanguage;

// @module: Line-oriented quiz transcript parser

// @const: Header patterns, matched at the start of a trimmed line
static ROUND_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^ROUND\s+(\w+)").unwrap());
static PLAYER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^PLAYER\s+(\w+)").unwrap());
static QUESTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^QUESTION\s+(\w+)").unwrap());

// @const: Answer line, the remainder must be non-empty
static ANSWER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^ANS:\s*(.+)").unwrap());

// @const: `<primary> (accept <alt1, alt2>)`
static ACCEPT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)\s*\(accept\s+(.+?)\)").unwrap()
});

// @const: Separator for `<primary> or <alt>` answers (case-sensitive)
static OR_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+or\s+").unwrap());

static TRANSLATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^({}):\s*(.+)",
        TranslationLanguage::name_alternation()
    ))
    .unwrap()
});

// @const: Leading "accept " marker(s) inside a translation value
static TRANSLATION_ACCEPT_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:accept\s+)+").unwrap());

// @const: Section markers that are never part of a question
static SECTION_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(TIEBREAKER|SPARE|NEAREST)").unwrap()
});

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizMetadata {
    /// Quiz title, filled in by the caller
    pub title: String,

    /// Originating file name, filled in by the caller
    pub source: String,

    /// Date the conversion ran
    pub date: NaiveDate,

    /// Number of rounds in the document
    pub rounds: usize,
}

/// Parsed quiz: metadata plus the round/player/question tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDocument {
    pub metadata: QuizMetadata,
    pub rounds: Vec<Round>,
}

impl QuizDocument {
    /// Create an empty document dated `date`
    pub fn new(date: NaiveDate) -> Self {
        QuizDocument {
            metadata: QuizMetadata {
                title: String::new(),
                source: String::new(),
                date,
                rounds: 0,
            },
            rounds: Vec::new(),
        }
    }

    /// Total number of questions across every round and player
    pub fn total_questions(&self) -> usize {
        self.rounds
            .iter()
            .flat_map(|round| round.players.iter())
            .map(|player| player.questions.len())
            .sum()
    }

    /// Serialize to JSON, pretty-printed with a two-space indent when `pretty` is set
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// A round of the contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round_number: u64,
    pub round_name: String,
    pub players: Vec<Player>,
}

impl Round {
    pub fn new(round_number: u64) -> Self {
        Round {
            round_number,
            round_name: format!("Round {}", round_number),
            players: Vec::new(),
        }
    }
}

/// Questions set for one player within a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_number: u64,
    pub questions: Vec<Question>,
}

impl Player {
    pub fn new(player_number: u64) -> Self {
        Player {
            player_number,
            questions: Vec::new(),
        }
    }
}

/// A single question with its answer, alternates and translations
///
/// Empty `translations` and `accept` collections are left out of the
/// serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_number: u64,
    pub question_text: String,
    pub answer: String,

    /// Lowercase language name to translated text, in the order first seen
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub translations: IndexMap<String, String>,

    /// Alternate answers a grader should also accept
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accept: Vec<String>,
}

impl Question {
    pub fn new(question_number: u64) -> Self {
        Question {
            question_number,
            question_text: String::new(),
            answer: String::new(),
            translations: IndexMap::new(),
            accept: Vec::new(),
        }
    }
}

/// What the parser is currently reading free text for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// Nothing open yet
    #[default]
    Idle,
    /// Between a question header and its answer line
    CollectingQuestionText,
    /// After an answer line, waiting for translation lines
    CollectingTranslations,
}

/// Classification of a single trimmed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    RoundHeader(u64),
    PlayerHeader(u64),
    QuestionHeader(u64),
    /// Everything after `ANS:`
    Answer(&'a str),
    Translation {
        language: TranslationLanguage,
        text: &'a str,
    },
    /// Free text belonging to the open question
    Continuation(&'a str),
    /// TIEBREAKER / SPARE / NEAREST lines met while reading question text
    SectionMarker,
    /// Anything else; dropped
    Ignored,
}

/// Answer value split into the primary answer and its alternates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnswer {
    pub answer: String,
    pub accept: Vec<String>,
}

/// Convert a header token (`"3"`, `"THREE"`, `"three"`) to a number
///
/// Digits are parsed directly, with single underscores allowed between
/// digits (`1_000`); the words ONE through TEN are looked up
/// case-insensitively. Anything else, including integers beyond `u64::MAX`,
/// resolves to 1.
pub fn word_to_number(token: &str) -> u64 {
    if let Some(number) = parse_digits(token) {
        return number;
    }

    match token.to_uppercase().as_str() {
        "ONE" => 1,
        "TWO" => 2,
        "THREE" => 3,
        "FOUR" => 4,
        "FIVE" => 5,
        "SIX" => 6,
        "SEVEN" => 7,
        "EIGHT" => 8,
        "NINE" => 9,
        "TEN" => 10,
        _ => 1,
    }
}

fn parse_digits(token: &str) -> Option<u64> {
    let valid = !token.is_empty()
        && token
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !valid {
        return None;
    }

    token.replace('_', "").parse().ok()
}

/// Split the text after `ANS:` into the answer and its accepted alternates
///
/// `Paris (accept Paris, France)` yields `Paris` with `[Paris, France]`;
/// `Tokyo or Kyoto or Osaka` yields `Tokyo` with `[Kyoto, Osaka]`.
pub fn parse_answer(rest: &str) -> ParsedAnswer {
    let rest = rest.trim();

    if let Some(caps) = ACCEPT_REGEX.captures(rest) {
        let answer = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
        let accept = caps
            .get(2)
            .map_or("", |m| m.as_str())
            .split(',')
            .map(|alt| alt.trim().to_string())
            .collect();
        return ParsedAnswer { answer, accept };
    }

    let parts: Vec<&str> = OR_SPLIT_REGEX.split(rest).collect();
    if parts.len() > 1 {
        return ParsedAnswer {
            answer: parts[0].trim().to_string(),
            accept: parts[1..].iter().map(|part| part.trim().to_string()).collect(),
        };
    }

    ParsedAnswer {
        answer: rest.to_string(),
        accept: Vec::new(),
    }
}

fn strip_accept_prefix(text: &str) -> String {
    TRANSLATION_ACCEPT_PREFIX_REGEX.replace(text, "").into_owned()
}

/// Where the question currently receiving text, answers and translations lives
#[derive(Debug)]
enum QuestionSlot {
    /// Inside the document tree
    Attached {
        round: usize,
        player: usize,
        question: usize,
    },
    /// Opened while no player was open. It is filled in like any other
    /// question but never reaches the output.
    Orphan(Question),
}

/// Mutable state for one parse
#[derive(Debug)]
struct ParseCursor {
    document: QuizDocument,
    state: ParseState,
    current_round: Option<usize>,
    current_player: Option<(usize, usize)>,
    current_question: Option<QuestionSlot>,
    pending_text: Vec<String>,
    orphaned_questions: usize,
}

impl ParseCursor {
    fn new(date: NaiveDate) -> Self {
        ParseCursor {
            document: QuizDocument::new(date),
            state: ParseState::Idle,
            current_round: None,
            current_player: None,
            current_question: None,
            pending_text: Vec::new(),
            orphaned_questions: 0,
        }
    }

    fn current_question_mut(&mut self) -> Option<&mut Question> {
        match &mut self.current_question {
            Some(QuestionSlot::Attached { round, player, question }) => self
                .document
                .rounds
                .get_mut(*round)?
                .players
                .get_mut(*player)?
                .questions
                .get_mut(*question),
            Some(QuestionSlot::Orphan(question)) => Some(question),
            None => None,
        }
    }

    /// Move buffered continuation lines into the open question's text
    fn flush_question_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }

        let text = self.pending_text.join(" ").trim().to_string();
        if let Some(question) = self.current_question_mut() {
            question.question_text = text;
            self.pending_text.clear();
        }
    }

    fn open_round(&mut self, round_number: u64) -> usize {
        self.document.rounds.push(Round::new(round_number));
        let index = self.document.rounds.len() - 1;
        self.current_round = Some(index);
        index
    }

    fn apply(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::Blank | LineKind::SectionMarker | LineKind::Ignored => {}

            LineKind::RoundHeader(number) => {
                self.open_round(number);
            }

            LineKind::PlayerHeader(number) => {
                let round_index = match self.current_round {
                    Some(index) => index,
                    None => {
                        debug!("Player {} appears before any round, opening Round 1", number);
                        self.open_round(1)
                    }
                };

                let players = &mut self.document.rounds[round_index].players;
                players.push(Player::new(number));
                self.current_player = Some((round_index, players.len() - 1));
            }

            LineKind::QuestionHeader(number) => {
                self.flush_question_text();

                let question = Question::new(number);
                let slot = match self.current_player {
                    Some((round, player)) => {
                        let questions = &mut self.document.rounds[round].players[player].questions;
                        questions.push(question);
                        QuestionSlot::Attached {
                            round,
                            player,
                            question: questions.len() - 1,
                        }
                    }
                    None => {
                        debug!("Question {} has no open player and will not be kept", number);
                        self.orphaned_questions += 1;
                        QuestionSlot::Orphan(question)
                    }
                };

                self.current_question = Some(slot);
                self.state = ParseState::CollectingQuestionText;
            }

            LineKind::Answer(rest) => {
                if self.current_question.is_none() {
                    trace!("Answer line without an open question: {}", rest);
                    return;
                }

                self.flush_question_text();

                let parsed = parse_answer(rest);
                if let Some(question) = self.current_question_mut() {
                    question.answer = parsed.answer;
                    // A plain answer leaves earlier alternates in place
                    if !parsed.accept.is_empty() {
                        question.accept = parsed.accept;
                    }
                }

                self.state = ParseState::CollectingTranslations;
            }

            LineKind::Translation { language, text } => {
                let text = strip_accept_prefix(text.trim());
                if let Some(question) = self.current_question_mut() {
                    question.translations.insert(language.key().to_string(), text);
                }
            }

            LineKind::Continuation(line) => {
                if self.current_question.is_some() {
                    self.pending_text.push(line.to_string());
                }
            }
        }
    }

    fn finish(mut self) -> QuizDocument {
        self.flush_question_text();
        self.document.metadata.rounds = self.document.rounds.len();

        debug!(
            "Parsed {} round(s), {} question(s), {} orphaned question(s) dropped",
            self.document.metadata.rounds,
            self.document.total_questions(),
            self.orphaned_questions
        );

        self.document
    }
}

/// Transcript parser
///
/// Parsing never fails: unexpected lines are either absorbed as question text
/// or dropped.
#[derive(Debug, Clone)]
pub struct QuizParser {
    date: NaiveDate,
}

impl Default for QuizParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizParser {
    /// Parser that stamps documents with today's local date
    pub fn new() -> Self {
        Self::with_date(Local::now().date_naive())
    }

    /// Parser that stamps documents with a fixed date
    pub fn with_date(date: NaiveDate) -> Self {
        QuizParser { date }
    }

    /// Classify one line given the current parse state
    ///
    /// Headers and answer lines are recognised in any state. Translation lines
    /// are only recognised after an answer, and continuation text only between
    /// a question header and its answer.
    pub fn classify_line(line: &str, state: ParseState) -> LineKind<'_> {
        let line = line.trim();
        if line.is_empty() {
            return LineKind::Blank;
        }

        if let Some(caps) = ROUND_REGEX.captures(line) {
            return LineKind::RoundHeader(word_to_number(&caps[1]));
        }
        if let Some(caps) = PLAYER_REGEX.captures(line) {
            return LineKind::PlayerHeader(word_to_number(&caps[1]));
        }
        if let Some(caps) = QUESTION_REGEX.captures(line) {
            return LineKind::QuestionHeader(word_to_number(&caps[1]));
        }
        if let Some(rest) = ANSWER_REGEX.captures(line).and_then(|caps| caps.get(1)) {
            return LineKind::Answer(rest.as_str());
        }

        if state == ParseState::CollectingTranslations && line.contains(':') {
            if let Some(caps) = TRANSLATION_REGEX.captures(line) {
                let language = caps
                    .get(1)
                    .and_then(|m| TranslationLanguage::from_name(m.as_str()));
                if let (Some(language), Some(text)) = (language, caps.get(2)) {
                    return LineKind::Translation {
                        language,
                        text: text.as_str(),
                    };
                }
            }
        }

        if state == ParseState::CollectingQuestionText {
            if SECTION_MARKER_REGEX.is_match(line) {
                return LineKind::SectionMarker;
            }
            return LineKind::Continuation(line);
        }

        LineKind::Ignored
    }

    /// Parse the full text of one transcript
    pub fn parse(&self, text: &str) -> QuizDocument {
        let mut cursor = ParseCursor::new(self.date);

        for (line_number, line) in text.split('\n').enumerate() {
            let kind = Self::classify_line(line, cursor.state);
            trace!("line {}: {:?}", line_number + 1, kind);
            cursor.apply(kind);
        }

        cursor.finish()
    }
}

/// Parse a transcript dated today
pub fn parse_transcript(text: &str) -> QuizDocument {
    QuizParser::new().parse(text)
}
