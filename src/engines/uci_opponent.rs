//! UCI engine opponent.
//!
//! Spawns an external UCI engine as a child process, performs the
//! handshake synchronously, then moves all pipe I/O onto a worker thread.
//! The game loop stays responsive: it queues a position and polls for the
//! engine's `bestmove` without blocking on the pipes.
//!
//! At most one request is in flight at a time. If a new position is
//! queued while the engine is still thinking, it replaces any previously
//! queued position and is sent once the in-flight search completes.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use crate::engines::opponent_trait::Opponent;
use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Piece, PlayerMove};
use crate::utils::algebraic::parse_long_algebraic;
use crate::utils::fen_generator::generate_fen;

/// Options sent after `uciok`, mirroring a casual-play configuration.
const ENGINE_OPTIONS: [(&str, &str); 5] = [
    ("Threads", "4"),
    ("Hash", "16"),
    ("Ponder", "false"),
    ("UCI_LimitStrength", "true"),
    ("UCI_Elo", "2850"),
];

/// Fixed per-move search time handed to `go movetime`.
const GO_MOVETIME_MS: u32 = 200;

pub struct UciOpponent {
    name: String,
    // Dropped (set to None) to tell the worker to quit the engine.
    request_tx: Option<Sender<String>>,
    reply_rx: Receiver<Result<String, String>>,
    worker: Option<JoinHandle<()>>,
    in_flight: bool,
    pending_fen: Option<String>,
}

impl UciOpponent {
    /// Looks for an engine binary in the current working directory. Any
    /// file whose name starts with `stockfish` qualifies.
    pub fn discover() -> Option<PathBuf> {
        let entries = std::fs::read_dir(".").ok()?;

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let starts_with_engine_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with("stockfish"))
                .unwrap_or(false);
            if starts_with_engine_name {
                return Some(path);
            }
        }

        None
    }

    /// Spawns the engine and completes the UCI handshake before returning,
    /// so a broken binary fails fast instead of mid-game.
    pub fn spawn(engine_path: &Path) -> Result<Self, ChessErrors> {
        let mut child = Command::new(engine_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| {
                ChessErrors::EngineProcessFailure(format!(
                    "failed to launch {}: {err}",
                    engine_path.display()
                ))
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            ChessErrors::EngineProcessFailure("engine stdin unavailable".to_owned())
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            ChessErrors::EngineProcessFailure("engine stdout unavailable".to_owned())
        })?;

        let mut session = EngineSession {
            child,
            stdin,
            reader: BufReader::new(stdout),
        };

        let name = session.handshake()?;

        let (request_tx, request_rx) = mpsc::channel::<String>();
        let (reply_tx, reply_rx) = mpsc::channel::<Result<String, String>>();

        let worker = std::thread::spawn(move || {
            session.run_worker(request_rx, reply_tx);
        });

        Ok(UciOpponent {
            name,
            request_tx: Some(request_tx),
            reply_rx,
            worker: Some(worker),
            in_flight: false,
            pending_fen: None,
        })
    }

    #[cfg(test)]
    fn with_channels(
        request_tx: Sender<String>,
        reply_rx: Receiver<Result<String, String>>,
    ) -> Self {
        UciOpponent {
            name: "test engine".to_owned(),
            request_tx: Some(request_tx),
            reply_rx,
            worker: None,
            in_flight: false,
            pending_fen: None,
        }
    }

    fn send_request(&mut self, fen: String) -> Result<(), ChessErrors> {
        let request_tx = self.request_tx.as_ref().ok_or_else(|| {
            ChessErrors::EngineProcessFailure("engine worker is gone".to_owned())
        })?;
        request_tx.send(fen).map_err(|_| {
            ChessErrors::EngineProcessFailure("engine worker is gone".to_owned())
        })?;
        self.in_flight = true;
        Ok(())
    }
}

/// Matches a `bestmove` payload against the legal move list. A missing
/// promotion suffix on a promoting move defaults to a queen.
fn match_best_move(best_move: &str, legal_moves: &[Move]) -> Result<PlayerMove, ChessErrors> {
    if best_move == "(none)" {
        return Err(ChessErrors::EngineProtocolViolation(
            "engine reported no best move".to_owned(),
        ));
    }

    let (from, to, promotion) = parse_long_algebraic(best_move)
        .map_err(|_| ChessErrors::EngineReturnedUnknownMove(best_move.to_owned()))?;

    let matched = legal_moves
        .iter()
        .find(|mv| mv.from == from && mv.to == to)
        .ok_or_else(|| ChessErrors::EngineReturnedUnknownMove(best_move.to_owned()))?;

    let promotion = if matched.promotes && promotion == Piece::None {
        Piece::Queen
    } else {
        promotion
    };

    Ok(PlayerMove {
        mv: *matched,
        promotion,
    })
}

impl Opponent for UciOpponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn queue_move_request(
        &mut self,
        board: &Board,
        player_turn: Color,
    ) -> Result<(), ChessErrors> {
        let fen = generate_fen(board, player_turn);

        if self.in_flight {
            // The newest position wins; the stale reply is dropped in poll.
            self.pending_fen = Some(fen);
            return Ok(());
        }

        self.send_request(fen)
    }

    fn poll_move(&mut self, legal_moves: &[Move]) -> Result<Option<PlayerMove>, ChessErrors> {
        if !self.in_flight {
            return Ok(None);
        }

        let reply = match self.reply_rx.try_recv() {
            Ok(reply) => reply,
            Err(TryRecvError::Empty) => return Ok(None),
            Err(TryRecvError::Disconnected) => {
                return Err(ChessErrors::EngineProcessFailure(
                    "engine worker is gone".to_owned(),
                ))
            }
        };

        self.in_flight = false;

        if let Some(fen) = self.pending_fen.take() {
            // A newer position superseded this search; discard the reply.
            self.send_request(fen)?;
            return Ok(None);
        }

        let best_move = reply.map_err(ChessErrors::EngineProcessFailure)?;
        let chosen = match_best_move(&best_move, legal_moves)?;
        Ok(Some(chosen))
    }
}

impl Drop for UciOpponent {
    fn drop(&mut self) {
        // Closing the request channel tells the worker to quit the engine.
        drop(self.request_tx.take());

        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Owns the child process and both pipe ends. Lives on the calling thread
/// for the handshake, then moves onto the worker thread for the game.
struct EngineSession {
    child: Child,
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
}

impl EngineSession {
    fn handshake(&mut self) -> Result<String, ChessErrors> {
        self.write_line("uci")?;
        let name = self.read_until_with_name("uciok")?;

        for (option, value) in ENGINE_OPTIONS {
            self.write_line(&format!("setoption name {option} value {value}"))?;
        }

        self.sync()?;
        Ok(name)
    }

    fn run_worker(
        mut self,
        request_rx: Receiver<String>,
        reply_tx: Sender<Result<String, String>>,
    ) {
        while let Ok(fen) = request_rx.recv() {
            let reply = self.search(&fen);
            if reply_tx.send(reply).is_err() {
                break;
            }
        }

        let _ = self.write_line("quit");
        let _ = self.child.wait();
    }

    fn search(&mut self, fen: &str) -> Result<String, String> {
        self.search_inner(fen).map_err(|err| err.to_string())
    }

    fn search_inner(&mut self, fen: &str) -> Result<String, ChessErrors> {
        self.write_line("ucinewgame")?;
        self.sync()?;
        self.write_line(&format!("position fen {fen}"))?;
        self.write_line(&format!("go movetime {GO_MOVETIME_MS}"))?;

        loop {
            let line = self.read_line()?;
            if let Some(rest) = line.strip_prefix("bestmove ") {
                let best_move = rest.split_whitespace().next().ok_or_else(|| {
                    ChessErrors::EngineProtocolViolation(format!("bad bestmove line: {line}"))
                })?;
                return Ok(best_move.to_owned());
            }
        }
    }

    fn sync(&mut self) -> Result<(), ChessErrors> {
        self.write_line("isready")?;
        loop {
            if self.read_line()? == "readyok" {
                return Ok(());
            }
        }
    }

    /// Reads until the terminator line, capturing the `id name` payload
    /// along the way. Falls back to a generic label if the engine never
    /// identifies itself.
    fn read_until_with_name(&mut self, terminator: &str) -> Result<String, ChessErrors> {
        let mut name = "UCI engine".to_owned();

        loop {
            let line = self.read_line()?;
            if let Some(rest) = line.strip_prefix("id name ") {
                name = rest.to_owned();
            }
            if line == terminator {
                return Ok(name);
            }
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), ChessErrors> {
        writeln!(self.stdin, "{line}")
            .and_then(|_| self.stdin.flush())
            .map_err(|err| ChessErrors::IoFailure(format!("engine write failed: {err}")))
    }

    fn read_line(&mut self) -> Result<String, ChessErrors> {
        let mut line = String::new();
        let bytes = self
            .reader
            .read_line(&mut line)
            .map_err(|err| ChessErrors::IoFailure(format!("engine read failed: {err}")))?;

        if bytes == 0 {
            return Err(ChessErrors::EngineProcessFailure(
                "engine closed its output pipe".to_owned(),
            ));
        }

        Ok(line.trim_end().to_owned())
    }
}
