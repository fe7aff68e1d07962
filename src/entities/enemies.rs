//! Enemy entities
//!
//! Defense processes patrolling the grid. Difficulty drives the damage
//! taken per typing mistake and the shape of the hack sequence the player
//! has to enter to break them.

use rand::seq::SliceRandom;
use rand::Rng;

use super::EntityId;
use crate::world::Position;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!?.#@$%_-&";

/// A defense process occupying a tile
#[derive(Debug, Clone)]
pub struct Enemy {
    id: EntityId,
    pos: Position,
    difficulty: i32,
    damage: i32,
}

impl Enemy {
    /// Create an enemy. Negative difficulty is clamped to zero.
    pub fn new(difficulty: i32) -> Self {
        let difficulty = difficulty.max(0);
        Self {
            id: EntityId::next(),
            pos: Position::default(),
            difficulty,
            // Damage per typing mistake scales directly with difficulty.
            damage: difficulty,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub(crate) fn move_to(&mut self, pos: Position) {
        self.pos = pos;
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn glyph(&self) -> char {
        '§'
    }

    /// Generate the hack sequence for a battle against this enemy.
    ///
    /// Always opens with an entry call and closes with a kill call; each
    /// difficulty tier from 10 down to 1 adds one themed line in between,
    /// so a difficulty-`n` enemy yields `2 + min(n, 10)` lines.
    pub fn challenge_code(&self, rng: &mut impl Rng) -> Vec<String> {
        let mut lines = vec![gen_entry(rng)];
        if self.difficulty >= 10 {
            lines.push(gen_port_scan(rng));
        }
        if self.difficulty >= 9 {
            lines.push(gen_shatter(rng));
        }
        if self.difficulty >= 8 {
            lines.push(gen_mitm(rng));
        }
        if self.difficulty >= 7 {
            lines.push(gen_sql_injection(rng));
        }
        if self.difficulty >= 6 {
            lines.push(gen_buffer_overflow(rng));
        }
        if self.difficulty >= 5 {
            lines.push(gen_fork_bomb(rng));
        }
        if self.difficulty >= 4 {
            lines.push(gen_mem_scan(rng));
        }
        if self.difficulty >= 3 {
            lines.push(gen_code_injection(rng));
        }
        if self.difficulty >= 2 {
            lines.push(gen_brute_force(rng));
        }
        if self.difficulty >= 1 {
            lines.push(gen_password(rng, self.difficulty));
        }
        lines.push(gen_kill(rng));
        lines
    }
}

fn pick<'a>(rng: &mut impl Rng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or("")
}

fn gen_entry(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["hack", "init_hack", "startHack"]);
    let arg = pick(rng, &["enemy", "script", "process", "defence", ""]);
    format!("{name}({arg})")
}

fn gen_kill(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["kill", "finish", "exit"]);
    let arg = pick(rng, &["enemy", "script", "process", "", "", ""]);
    format!("{name}({arg})")
}

fn gen_password(rng: &mut impl Rng, difficulty: i32) -> String {
    let name = pick(
        rng,
        &["password", "pass", "enter_pass", "enter_password", "EnterPass"],
    );
    // Harder enemies draw the password from richer alphabets.
    let alphabets: &[&str] = if difficulty < 3 {
        &[LOWER]
    } else if difficulty < 6 {
        &[LOWER, UPPER]
    } else if difficulty < 9 {
        &[LOWER, UPPER, DIGITS]
    } else {
        &[LOWER, UPPER, DIGITS, SYMBOLS]
    };
    let mut pwd = String::new();
    for _ in 0..difficulty + 2 {
        let alphabet = pick(rng, alphabets).as_bytes();
        if let Some(b) = alphabet.choose(rng) {
            pwd.push(*b as char);
        }
    }
    format!("{name}({pwd})")
}

fn gen_brute_force(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["brute_force", "BruteForceHack", "start_brute_force"]);
    format!("{name}()")
}

fn gen_code_injection(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["CodeInjection", "InjectCode", "inject_aob"]);
    let arg = pick(rng, &["", "func", "aob"]);
    format!("{name}({arg})")
}

fn gen_mem_scan(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["MemScan", "MemoryScan", "mem_scan", "memory_scan"]);
    let mut addr = format!("{:#x}", rng.gen::<u32>());
    if rng.gen_bool(0.5) {
        addr = addr.to_uppercase();
    }
    format!("{name}({addr})")
}

fn gen_fork_bomb(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["ForkBomb", "startForkBomb", "fork_bomb"]);
    let arg = rng.gen_range(10_000..=1_000_000);
    format!("{name}({arg})")
}

fn gen_buffer_overflow(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["buffer_overflow", "BufferOverflow", "InitBufferOF"]);
    format!("{name}()")
}

fn gen_sql_injection(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["InjectSQL", "SQLInjection", "StartSQLI"]);
    let arg = pick(rng, &["", "query", "sql_query"]);
    format!("{name}({arg})")
}

fn gen_mitm(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["startMITM", "ManInTheMiddle", "MITM", "HackMITM"]);
    format!("{name}()")
}

fn gen_shatter(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["shatter_attack", "startShatterAttack", "shatterAtt"]);
    format!("{name}()")
}

fn gen_port_scan(rng: &mut impl Rng) -> String {
    let name = pick(rng, &["openPorts", "lookForPort", "find_open_port"]);
    format!("{name}()")
}
