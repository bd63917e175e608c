use crate::domain::errors::{ResultStep, TournamentError, TournamentResult};
use crate::domain::matches::{Match, MatchId, MatchOutcome, MatchScore};
use crate::domain::team::{Team, TeamId};

use super::match_ledger::MatchLedger;
use super::team_registry::TeamRegistry;

/// Match and team state after a result was processed
#[derive(Debug, Clone)]
pub struct ResultReport {
    pub match_record: Match,
    pub winner: Team,
    pub loser: Team,
}

/// Applies match outcomes to the ledger and then to both teams
///
/// The match is decided first. Each team is then credited through the
/// registry's once-only application, and the match is flagged settled last.
/// A crash or storage failure between those writes leaves a decided,
/// unsettled match that `reconcile` completes without double counting.
#[derive(Clone)]
pub struct ResultProcessor {
    ledger: MatchLedger,
    registry: TeamRegistry,
}

impl ResultProcessor {
    pub fn new(ledger: MatchLedger, registry: TeamRegistry) -> Self {
        Self { ledger, registry }
    }

    /// Records a result and credits both teams
    ///
    /// # Errors
    /// * `MatchNotFound` - unknown match, nothing is written
    /// * `InvalidInput` - winner not in the match or negative points
    /// * `AlreadyDecided` - the match already has a result
    /// * `PartialFailure` - the match is decided but team statistics were not
    ///   fully applied; `reconcile` finishes the job
    pub async fn record_result(
        &self,
        match_id: MatchId,
        winner_id: TeamId,
        points_won: i64,
        points_lost: i64,
    ) -> TournamentResult<ResultReport> {
        let score = MatchScore::new(points_won, points_lost)?;
        let (_, outcome) = self.ledger.record_result(match_id, winner_id, score).await?;

        self.settle(&outcome).await?;
        self.report(&outcome).await
    }

    /// Re-applies whatever team statistics a decided match is missing
    pub async fn reconcile(&self, match_id: MatchId) -> TournamentResult<ResultReport> {
        let m = self.ledger.get(match_id).await?;
        let outcome = m.outcome().ok_or_else(|| {
            TournamentError::invalid_input(format!(
                "Match {} has no recorded result",
                match_id
            ))
        })?;

        if !m.stats_settled() {
            tracing::info!(match_id, "reconciling match statistics");
            self.settle(&outcome).await?;
        }

        self.report(&outcome).await
    }

    /// Reconciles every decided but unsettled match, oldest first
    ///
    /// A match that fails is logged and left unsettled; the rest are still
    /// attempted. Returns the ids that were settled.
    pub async fn reconcile_pending(&self) -> TournamentResult<Vec<MatchId>> {
        let pending = self.ledger.list_unsettled().await?;
        let mut reconciled = Vec::with_capacity(pending.len());
        let mut failed = 0usize;

        for m in pending {
            let Some(outcome) = m.outcome() else {
                continue;
            };
            match self.settle(&outcome).await {
                Ok(()) => reconciled.push(m.match_id()),
                Err(e) => {
                    failed += 1;
                    tracing::error!(
                        match_id = m.match_id(),
                        error = %e,
                        "failed to reconcile match"
                    );
                }
            }
        }

        if !reconciled.is_empty() || failed > 0 {
            tracing::warn!(
                count = reconciled.len(),
                failed,
                ?reconciled,
                "reconciled unsettled matches"
            );
        }

        Ok(reconciled)
    }

    async fn settle(&self, outcome: &MatchOutcome) -> TournamentResult<()> {
        let match_id = outcome.match_id;

        // Both sides are attempted even if the first one fails.
        let winner = self
            .registry
            .apply_match_stats(match_id, outcome.winner_id, &outcome.winner_delta())
            .await;
        let loser = self
            .registry
            .apply_match_stats(match_id, outcome.loser_id, &outcome.loser_delta())
            .await;

        let failure = match (winner, loser) {
            (Err(e), _) => Some((ResultStep::WinnerStats, e)),
            (Ok(_), Err(e)) => Some((ResultStep::LoserStats, e)),
            (Ok(_), Ok(_)) => None,
        };

        if let Some((step, source)) = failure {
            tracing::warn!(
                match_id,
                %step,
                error = %source,
                "match decided but team stats incomplete"
            );
            return Err(TournamentError::partial(match_id, step, source));
        }

        if let Err(source) = self.ledger.mark_settled(match_id).await {
            tracing::warn!(match_id, error = %source, "match stats applied but not marked settled");
            return Err(TournamentError::partial(
                match_id,
                ResultStep::SettleMatch,
                source,
            ));
        }

        tracing::info!(
            match_id,
            winner_id = outcome.winner_id,
            loser_id = outcome.loser_id,
            "match settled"
        );
        Ok(())
    }

    async fn report(&self, outcome: &MatchOutcome) -> TournamentResult<ResultReport> {
        Ok(ResultReport {
            match_record: self.ledger.get(outcome.match_id).await?,
            winner: self.registry.get(outcome.winner_id).await?,
            loser: self.registry.get(outcome.loser_id).await?,
        })
    }
}
