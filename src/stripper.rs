/// A positional removal rule: a line containing `trigger` is dropped together
/// with the `skip` lines that follow it, whatever those lines contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRule {
    /// Literal substring that marks the first line of a block.
    pub trigger: &'static str,
    /// Number of lines discarded after the trigger line.
    pub skip: usize,
}

impl BlockRule {
    /// The four-line `if (data.passing_score !== undefined) { ... }` block
    /// in the assessment service's `updateAssessment` method.
    pub const PASSING_SCORE: BlockRule = BlockRule {
        trigger: "if (data.passing_score !== undefined)",
        skip: 3,
    };

    /// Total lines removed per match when enough input follows the trigger.
    pub fn block_len(&self) -> usize {
        self.skip + 1
    }
}

/// Scanner state while walking the input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Lines are tested against the trigger.
    Scanning,
    /// Lines are discarded unconditionally until `remaining` reaches zero.
    Skipping { remaining: usize },
}

/// The result of stripping blocks from a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripOutcome {
    /// Rewritten text, lines rejoined with `\n`.
    pub text: String,
    /// Number of trigger lines that started a block.
    pub blocks_removed: usize,
    /// Number of lines discarded, trigger lines included.
    pub lines_removed: usize,
}

impl StripOutcome {
    /// True when no block matched.
    pub fn is_unchanged(&self) -> bool {
        self.blocks_removed == 0
    }
}

/// Remove every block matched by `rule` from `text`.
///
/// The text is split on `\n` and rejoined with `\n`, so a file without a
/// match comes back identical. A trigger seen inside an active skip window
/// is discarded as part of that window and never starts a block of its own.
pub fn strip_lines(text: &str, rule: &BlockRule) -> StripOutcome {
    let mut kept: Vec<&str> = Vec::new();
    let mut state = ScanState::Scanning;
    let mut blocks_removed = 0;
    let mut lines_removed = 0;

    for (idx, line) in text.split('\n').enumerate() {
        state = match state {
            ScanState::Skipping { remaining } => {
                lines_removed += 1;
                if remaining > 1 {
                    ScanState::Skipping {
                        remaining: remaining - 1,
                    }
                } else {
                    ScanState::Scanning
                }
            }
            ScanState::Scanning if line.contains(rule.trigger) => {
                log::debug!("removing block starting at line {}", idx + 1);
                blocks_removed += 1;
                lines_removed += 1;
                if rule.skip > 0 {
                    ScanState::Skipping {
                        remaining: rule.skip,
                    }
                } else {
                    ScanState::Scanning
                }
            }
            ScanState::Scanning => {
                kept.push(line);
                ScanState::Scanning
            }
        };
    }

    if let ScanState::Skipping { remaining } = state {
        log::warn!("input ended with {remaining} line(s) of the last block still to skip");
    }

    StripOutcome {
        text: kept.join("\n"),
        blocks_removed,
        lines_removed,
    }
}
