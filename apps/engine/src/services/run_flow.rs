//! Run flow orchestration service - the commit-reveal move protocol.
//!
//! Bridges the pure domain rules with the oracle and ledger collaborators.
//! Per-player protocol states: Idle -> Committed -> Idle; success and fatal
//! failure both return to Idle. The shared epoch aggregate is touched only
//! under its lock.

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::cards::{CardKind, CardSelection};
use crate::domain::direction::{correct_direction, Direction};
use crate::domain::events::{EventKind, FeedEvent};
use crate::domain::outcome::{apply_reveal, MoveOutcome};
use crate::domain::rules::move_cost;
use crate::domain::run_state::{require_pending, PendingMove, PlayerId};
use crate::errors::engine::EngineError;
use crate::oracle::CommitContext;
use crate::state::engine_state::EngineState;

/// Move protocol service.
pub struct RunFlowService;

impl RunFlowService {
    pub fn new() -> Self {
        Self
    }

    /// Commit a move: validate, request an oracle commitment, debit the
    /// cipher cost, and record the pending move.
    ///
    /// The debit is immediate and irrevocable; later oracle failures do not
    /// refund it. An oracle failure during this call, by contrast, leaves
    /// the run untouched.
    pub async fn commit_move(
        &self,
        state: &EngineState,
        player: PlayerId,
        direction: Direction,
        cards: &[CardKind],
    ) -> Result<PendingMove, EngineError> {
        debug!(%player, direction = direction.label(), "Committing move");

        let selection = CardSelection::from_cards(cards)?;

        let (epoch_no, path_length) = {
            let epoch = state.epoch.lock().await;
            let epoch = epoch.as_ref().ok_or(EngineError::GameNotInitialized)?;
            (epoch.epoch_no, epoch.path_length)
        };

        // Validation pass: reject before any mutation or external effect.
        let (cost, position) = {
            let run = state
                .players
                .get(&player)
                .ok_or(EngineError::PlayerNotFound)?;
            if run.pending.is_some() {
                return Err(EngineError::OperationInProgress);
            }
            if run.position >= path_length {
                return Err(EngineError::PathAlreadyCompleted);
            }
            for kind in selection.iter() {
                if run.cards.count(kind) == 0 {
                    return Err(EngineError::InvalidCardSelection(format!(
                        "{} not owned",
                        kind.label()
                    )));
                }
            }
            let cost = move_cost(&selection);
            if run.ciphers < cost {
                return Err(EngineError::InsufficientCiphers {
                    needed: cost,
                    available: run.ciphers,
                });
            }
            (cost, run.position)
        };

        let handle = state
            .oracle
            .commit(CommitContext {
                player,
                epoch_no,
                position,
            })
            .await?;

        let pending = PendingMove {
            guessed: direction,
            cards: selection,
            handle,
            committed_epoch: epoch_no,
            committed_at: OffsetDateTime::now_utc(),
        };

        {
            let mut run = state
                .players
                .get_mut(&player)
                .ok_or(EngineError::PlayerNotFound)?;
            // Revalidate under the write lock; the validation pass dropped it.
            if run.pending.is_some() {
                return Err(EngineError::OperationInProgress);
            }
            if run.ciphers < cost {
                return Err(EngineError::InsufficientCiphers {
                    needed: cost,
                    available: run.ciphers,
                });
            }
            run.ciphers -= cost;
            run.joined_epoch = Some(epoch_no);
            run.pending = Some(pending.clone());
            run.touch();
        }

        info!(%player, direction = direction.label(), cost, epoch_no, "Move committed");
        {
            let mut feed = state.feed.lock();
            feed.append(FeedEvent::private(
                player,
                EventKind::Moved,
                format!("committed a step {} for {cost} ciphers", direction.label()),
            ));
            if !selection.is_empty() {
                let names: Vec<&str> = selection.iter().map(|k| k.label()).collect();
                feed.append(FeedEvent::private(
                    player,
                    EventKind::CardUsed,
                    format!("loaded {}", names.join(", ")),
                ));
            }
        }
        Ok(pending)
    }

    /// Reveal a committed move against the resolved oracle value.
    ///
    /// `RandomnessNotResolved` is retryable and changes nothing. Expired or
    /// stale randomness and epoch turnover are fatal for the pending move:
    /// it is cleared and the debited cost stays spent.
    pub async fn reveal_move(
        &self,
        state: &EngineState,
        player: PlayerId,
    ) -> Result<MoveOutcome, EngineError> {
        let pending = {
            let run = state
                .players
                .get(&player)
                .ok_or(EngineError::PlayerNotFound)?;
            require_pending(&run)?.clone()
        };

        let (epoch_no, path_length) = {
            let epoch = state.epoch.lock().await;
            let epoch = epoch.as_ref().ok_or(EngineError::GameNotInitialized)?;
            (epoch.epoch_no, epoch.path_length)
        };

        match state.oracle.is_resolved(&pending.handle).await {
            Ok(true) => {}
            Ok(false) => return Err(EngineError::RandomnessNotResolved),
            Err(err) => return Err(self.fail(state, player, &pending, err.into())),
        }

        let entropy = match state.oracle.reveal(&pending.handle).await {
            Ok(bytes) => bytes,
            Err(err) => return Err(self.fail(state, player, &pending, err.into())),
        };

        if pending.committed_epoch != epoch_no {
            return Err(self.fail(state, player, &pending, EngineError::StaleEpoch));
        }

        let correct = correct_direction(&entropy);
        debug!(
            %player,
            guessed = pending.guessed.label(),
            correct = correct.label(),
            "Revealing move"
        );

        let position = state
            .players
            .get(&player)
            .map(|run| run.position)
            .ok_or(EngineError::PlayerNotFound)?;
        let is_win = pending.guessed == correct && position + 1 == path_length;

        if is_win {
            return self
                .settle_win(state, player, &pending, correct, path_length, &entropy)
                .await;
        }

        let outcome = {
            let mut run = state
                .players
                .get_mut(&player)
                .ok_or(EngineError::PlayerNotFound)?;
            match &run.pending {
                Some(current) if current.handle == pending.handle => {}
                _ => return Err(EngineError::Conflict),
            }
            let outcome = apply_reveal(
                &mut run,
                pending.guessed,
                &pending.cards,
                correct,
                path_length,
                &entropy,
            );
            run.pending = None;
            run.touch();
            outcome
        };

        self.log_outcome(state, player, &outcome);
        Ok(outcome)
    }

    /// Pay the pool out and turn the epoch over for a winning final step.
    ///
    /// Runs entirely under the epoch lock so no purchase or competing win
    /// can straddle the turnover. A failed payout aborts the reveal with the
    /// pending move intact.
    async fn settle_win(
        &self,
        state: &EngineState,
        player: PlayerId,
        pending: &PendingMove,
        correct: Direction,
        path_length: u16,
        entropy: &[u8],
    ) -> Result<MoveOutcome, EngineError> {
        let mut epoch_guard = state.epoch.lock().await;
        let epoch = epoch_guard
            .as_mut()
            .ok_or(EngineError::GameNotInitialized)?;

        // The epoch may have turned over while the oracle was consulted.
        if epoch.epoch_no != pending.committed_epoch {
            drop(epoch_guard);
            return Err(self.fail(state, player, pending, EngineError::StaleEpoch));
        }

        let payout = epoch.prize_pool;
        state.ledger.credit(player, payout).await?;

        let outcome = {
            let mut run = state
                .players
                .get_mut(&player)
                .ok_or(EngineError::PlayerNotFound)?;
            match &run.pending {
                Some(current) if current.handle == pending.handle => {}
                _ => {
                    // The payout has settled; a vanished pending move here
                    // means a same-player operation raced the reveal.
                    warn!(%player, "pending move changed after win payout");
                    return Err(EngineError::Conflict);
                }
            }
            let outcome = apply_reveal(
                &mut run,
                pending.guessed,
                &pending.cards,
                correct,
                path_length,
                entropy,
            );
            run.pending = None;
            run.touch();
            outcome
        };

        epoch.advance();
        let new_epoch = epoch.epoch_no;
        drop(epoch_guard);

        info!(%player, payout, new_epoch, "Run completed, prize pool paid out");
        state.feed.lock().append(FeedEvent::global(
            EventKind::Won,
            format!("runner {player} breached the system and claimed {payout} units"),
        ));
        Ok(outcome)
    }

    /// Route a reveal failure, clearing the pending move when the failure
    /// class demands it. The debited commit cost is never refunded.
    fn fail(
        &self,
        state: &EngineState,
        player: PlayerId,
        pending: &PendingMove,
        err: EngineError,
    ) -> EngineError {
        if err.clears_pending() {
            debug!(%player, code = %err.code(), "Clearing pending move");
            if let Some(mut run) = state.players.get_mut(&player) {
                if run
                    .pending
                    .as_ref()
                    .is_some_and(|current| current.handle == pending.handle)
                {
                    run.pending = None;
                    run.touch();
                }
            }
        }
        err
    }

    fn log_outcome(&self, state: &EngineState, player: PlayerId, outcome: &MoveOutcome) {
        let mut feed = state.feed.lock();
        match outcome {
            MoveOutcome::Advanced { position, award } => {
                info!(%player, position, "Step correct");
                feed.append(FeedEvent::private(
                    player,
                    EventKind::Moved,
                    format!("advanced to position {position}"),
                ));
                feed.append(FeedEvent::private(
                    player,
                    EventKind::CardCollected,
                    format!("collected {} {} card(s)", award.count, award.kind.label()),
                ));
            }
            MoveOutcome::Saved => {
                info!(%player, "Wrong step absorbed by shield");
                feed.append(FeedEvent::private(
                    player,
                    EventKind::CardUsed,
                    "shield absorbed a wrong step".to_string(),
                ));
            }
            MoveOutcome::Reset => {
                info!(%player, "Wrong step, run reset");
                feed.append(FeedEvent::private(
                    player,
                    EventKind::Moved,
                    "wrong step, run reset to the start".to_string(),
                ));
            }
            // Win logging happens in settle_win with the payout amount.
            MoveOutcome::Won => {}
        }
    }
}
