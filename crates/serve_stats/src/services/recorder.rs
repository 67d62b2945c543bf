use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::models::{
    MatchInfo, MatchState, Phase, PlayerId, RallyRecord, ResultCategory, ServeOrder, Side,
};
use crate::repository::rally_log::RallyLog;

/// A match being scored: the sheet header, the live state and the rally log.
///
/// All commands run to completion before returning; a failed command leaves
/// the session untouched.
#[derive(Debug, Clone, Default)]
pub struct MatchSession {
    info: MatchInfo,
    state: MatchState,
    log: RallyLog,
}

impl MatchSession {
    pub fn new(info: MatchInfo) -> Self {
        Self {
            info,
            state: MatchState::new(),
            log: RallyLog::new(),
        }
    }

    pub fn info(&self) -> &MatchInfo {
        &self.info
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn records(&self) -> &[RallyRecord] {
        self.log.records()
    }

    pub fn rally_count(&self) -> usize {
        self.log.len()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.info.set_point)
    }

    pub fn current_server(&self) -> Option<PlayerId> {
        self.state.current_server()
    }

    /// Replaces the match sheet header. Rallies already logged keep the
    /// date and name they were recorded with.
    pub fn update_info(&mut self, info: MatchInfo) {
        self.info = info;
    }

    /// Confirms both serve orders and restarts both rotations from the first
    /// server, with the home side serving. The score is left alone.
    pub fn confirm_serve_order(&mut self, mine: &[u32], opponent: &[u32]) -> Result<()> {
        let mine = ServeOrder::try_from(mine)?;
        let opponent = ServeOrder::try_from(opponent)?;

        self.confirm_serve_orders(mine, opponent);
        Ok(())
    }

    /// [`Self::confirm_serve_order`] for orders that are already validated.
    pub fn confirm_serve_orders(&mut self, mine: ServeOrder, opponent: ServeOrder) {
        self.state.my_serve_order = Some(mine);
        self.state.opponent_serve_order = Some(opponent);
        self.state.scoreboard.rotations = Default::default();
        self.state.scoreboard.serving_side = Side::Own;

        info!(
            set = self.state.scoreboard.set_number,
            "Serve orders confirmed"
        );
    }

    /// Records one rally and returns the logged record.
    pub fn record_rally(&mut self, result: ResultCategory, winner: Side) -> Result<RallyRecord> {
        let server = self.current_server().ok_or(TrackerError::ServerNotSet)?;

        let state_before = self.state.clone();
        let before = state_before.scoreboard;
        let board = &mut self.state.scoreboard;
        board.award_point(winner);

        let (ace, effect, miss) = RallyRecord::flags_for(result);
        let record = RallyRecord {
            date: self.info.date,
            match_name: self.info.name.clone(),
            set_number: before.set_number,
            rally_number: before.rally_number,
            serving_side: before.serving_side,
            server,
            rotation_index: before.rotations.get(before.serving_side),
            result,
            ace,
            effect,
            miss,
            team_score: board.team_score,
            opponent_score: board.opponent_score,
        };
        board.rally_number += 1;

        debug!(
            set = record.set_number,
            rally = record.rally_number,
            server = %record.server,
            result = %record.result,
            winner = %winner,
            "Rally recorded"
        );

        self.log.append(record.clone(), state_before);
        Ok(record)
    }

    /// Removes the last rally and restores the match state, serve orders
    /// included, to how it was before that rally. Anything done since that
    /// rally (a serve order confirmation, a completed set) is rolled back with
    /// it. Returns `None` when there is nothing to undo.
    pub fn undo_last_rally(&mut self) -> Option<RallyRecord> {
        let (record, before) = self.log.pop_last()?;
        self.state = before;

        debug!(
            set = record.set_number,
            rally = record.rally_number,
            "Rally undone"
        );
        Some(record)
    }

    /// Closes the current set once either side has reached `threshold`.
    pub fn complete_set(&mut self, threshold: u32) -> Result<()> {
        let board = &mut self.state.scoreboard;
        if !board.set_point_reached(threshold) {
            return Err(TrackerError::SetInProgress {
                team: board.team_score,
                opponent: board.opponent_score,
                threshold,
            });
        }

        info!(
            set = board.set_number,
            team = board.team_score,
            opponent = board.opponent_score,
            "Set completed"
        );
        board.start_next_set();
        Ok(())
    }

    /// [`Self::complete_set`] using the set point on the match sheet.
    pub fn complete_current_set(&mut self) -> Result<()> {
        self.complete_set(self.info.set_point)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::Rotations;

    const MINE: [u32; 6] = [1, 2, 3, 4, 5, 6];
    const THEIRS: [u32; 6] = [11, 12, 13, 14, 15, 16];

    fn other(side: Side) -> Side {
        match side {
            Side::Own => Side::Opponent,
            Side::Opponent => Side::Own,
        }
    }

    fn session() -> MatchSession {
        let date = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
        MatchSession::new(MatchInfo::new(date, "Spring league", 25))
    }

    fn ready_session() -> MatchSession {
        let mut session = session();
        session.confirm_serve_order(&MINE, &THEIRS).unwrap();
        session
    }

    #[test]
    fn test_record_before_serve_order_fails() {
        let mut session = session();
        let result = session.record_rally(ResultCategory::Ace, Side::Own);

        assert!(matches!(result, Err(TrackerError::ServerNotSet)));
        assert!(session.records().is_empty());
        assert_eq!(session.state().scoreboard.team_score, 0);
        assert_eq!(session.state().scoreboard.rally_number, 1);
        assert_eq!(session.phase(), Phase::AwaitingServeOrder);
    }

    #[test]
    fn test_invalid_serve_order_changes_nothing() {
        let mut session = ready_session();
        session
            .record_rally(ResultCategory::APass, Side::Opponent)
            .unwrap();
        let state_before = session.state().clone();

        let result = session.confirm_serve_order(&[1, 2, 3], &THEIRS);
        assert!(matches!(result, Err(TrackerError::InvalidServeOrder(_))));
        let result = session.confirm_serve_order(&MINE, &[1, 2, 3, 4, 5, 6, 7]);
        assert!(matches!(result, Err(TrackerError::InvalidServeOrder(_))));

        assert_eq!(session.state(), &state_before);
    }

    #[test]
    fn test_current_server_after_confirmation() {
        let session = ready_session();
        assert_eq!(session.current_server().map(PlayerId::get), Some(1));
        assert_eq!(session.phase(), Phase::Ready);
    }

    #[test]
    fn test_ace_keeps_serve() {
        let mut session = ready_session();
        let record = session.record_rally(ResultCategory::Ace, Side::Own).unwrap();

        let board = session.state().scoreboard;
        assert_eq!(board.team_score, 1);
        assert_eq!(board.opponent_score, 0);
        assert_eq!(board.serving_side, Side::Own);
        assert_eq!(board.rotations, Rotations::default());
        assert_eq!(board.rally_number, 2);
        assert_eq!(session.records().len(), 1);

        assert_eq!((record.ace, record.effect, record.miss), (1, 0, 0));
        assert_eq!(record.server.get(), 1);
        assert_eq!(record.serving_side, Side::Own);
        assert_eq!(record.rally_number, 1);
        assert_eq!(record.team_score, 1);
        assert_eq!(record.match_name, "Spring league");
    }

    #[test]
    fn test_serve_miss_is_side_out() {
        let mut session = ready_session();
        let record = session
            .record_rally(ResultCategory::ServeMiss, Side::Opponent)
            .unwrap();

        let board = session.state().scoreboard;
        assert_eq!(board.opponent_score, 1);
        assert_eq!(board.serving_side, Side::Opponent);
        assert_eq!(board.rotations.opponent, 1);
        assert_eq!(board.rotations.own, 0);
        assert_eq!(session.current_server().map(PlayerId::get), Some(12));

        // the record keeps who actually served
        assert_eq!(record.server.get(), 1);
        assert_eq!(record.serving_side, Side::Own);
        assert_eq!(record.rotation_index, 0);
        assert_eq!(record.miss, 1);
    }

    #[test]
    fn test_rally_number_counts_successful_records_only() {
        let mut session = session();
        assert!(session.record_rally(ResultCategory::Ace, Side::Own).is_err());
        session.confirm_serve_order(&MINE, &THEIRS).unwrap();

        let winners = [Side::Own, Side::Opponent, Side::Opponent, Side::Own, Side::Own];
        for (i, winner) in winners.into_iter().enumerate() {
            let record = session.record_rally(ResultCategory::BPass, winner).unwrap();
            assert_eq!(record.rally_number, i as u32 + 1);
            assert_eq!(session.state().scoreboard.rally_number, i as u32 + 2);
        }
    }

    #[test]
    fn test_side_out_invariant_over_long_sequence() {
        let mut session = ready_session();
        let winners = [
            Side::Opponent,
            Side::Opponent,
            Side::Own,
            Side::Opponent,
            Side::Own,
            Side::Own,
            Side::Opponent,
            Side::Own,
            Side::Opponent,
            Side::Own,
            Side::Opponent,
            Side::Own,
            Side::Opponent,
            Side::Own,
            Side::Opponent,
            Side::Own,
        ];

        for winner in winners {
            let before = session.state().scoreboard;
            session.record_rally(ResultCategory::CPass, winner).unwrap();
            let after = session.state().scoreboard;

            if winner == before.serving_side {
                assert_eq!(after.serving_side, before.serving_side);
                assert_eq!(after.rotations, before.rotations);
            } else {
                assert_eq!(after.serving_side, winner);
                assert_eq!(
                    after.rotations.get(winner),
                    (before.rotations.get(winner) + 1) % 6
                );
                assert_eq!(
                    after.rotations.get(other(winner)),
                    before.rotations.get(other(winner))
                );
            }
        }

        // seven side-outs to the home team wrap its rotation past the start
        assert_eq!(session.state().scoreboard.rotations.own, 1);
    }

    #[test]
    fn test_undo_restores_previous_board() {
        let mut session = ready_session();
        session.record_rally(ResultCategory::Ace, Side::Own).unwrap();
        let before = session.state().scoreboard;

        session
            .record_rally(ResultCategory::ServeMiss, Side::Opponent)
            .unwrap();
        let undone = session.undo_last_rally().unwrap();

        assert_eq!(undone.result, ResultCategory::ServeMiss);
        assert_eq!(session.state().scoreboard, before);
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.current_server().map(PlayerId::get), Some(1));
    }

    #[test]
    fn test_undo_across_reconfirmation_restores_serve_orders() {
        let mut session = ready_session();
        session
            .record_rally(ResultCategory::APass, Side::Opponent)
            .unwrap();
        let before = session.state().clone();
        session
            .record_rally(ResultCategory::APass, Side::Opponent)
            .unwrap();

        session
            .confirm_serve_order(&[21, 22, 23, 24, 25, 26], &[31, 32, 33, 34, 35, 36])
            .unwrap();
        assert_eq!(session.current_server().map(PlayerId::get), Some(21));

        session.undo_last_rally().unwrap();

        assert_eq!(session.state(), &before);
        assert_eq!(session.state().scoreboard.serving_side, Side::Opponent);
        assert_eq!(session.state().scoreboard.rotations.opponent, 1);
        assert_eq!(session.current_server().map(PlayerId::get), Some(12));
        assert_eq!(
            session.state().my_serve_order,
            Some(ServeOrder::try_from(MINE.as_slice()).unwrap())
        );
    }

    #[test]
    fn test_undo_after_complete_set_reopens_set() {
        let mut session = ready_session();
        session.record_rally(ResultCategory::Ace, Side::Own).unwrap();
        let before = session.state().clone();
        session.record_rally(ResultCategory::Ace, Side::Own).unwrap();

        session.complete_set(2).unwrap();
        assert_eq!(session.state().scoreboard.set_number, 2);

        let undone = session.undo_last_rally().unwrap();

        assert_eq!(undone.set_number, 1);
        assert_eq!(undone.rally_number, 2);
        assert_eq!(session.state(), &before);
        assert_eq!(session.state().scoreboard.set_number, 1);
        assert_eq!(session.state().scoreboard.team_score, 1);
        assert_eq!(session.state().scoreboard.rally_number, 2);
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn test_undo_on_empty_log_is_noop() {
        let mut session = ready_session();
        let before = session.state().clone();

        assert!(session.undo_last_rally().is_none());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_complete_set_requires_set_point() {
        let mut session = ready_session();
        session.record_rally(ResultCategory::Ace, Side::Own).unwrap();

        let result = session.complete_set(25);
        assert!(matches!(
            result,
            Err(TrackerError::SetInProgress {
                team: 1,
                opponent: 0,
                threshold: 25
            })
        ));
        assert_eq!(session.state().scoreboard.set_number, 1);
    }

    #[test]
    fn test_complete_set_resets_counters() {
        let mut session = ready_session();
        session
            .record_rally(ResultCategory::APass, Side::Opponent)
            .unwrap();
        for _ in 0..25 {
            session.record_rally(ResultCategory::CPass, Side::Own).unwrap();
        }
        assert_eq!(session.state().scoreboard.team_score, 25);
        assert_eq!(session.phase(), Phase::SetComplete);

        session.complete_current_set().unwrap();

        let board = session.state().scoreboard;
        assert_eq!(board.set_number, 2);
        assert_eq!(board.team_score, 0);
        assert_eq!(board.opponent_score, 0);
        assert_eq!(board.rotations, Rotations::default());
        assert_eq!(board.rally_number, 1);
        assert_eq!(board.serving_side, Side::Own);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.records().len(), 26);

        let record = session.record_rally(ResultCategory::Ace, Side::Own).unwrap();
        assert_eq!(record.set_number, 2);
        assert_eq!(record.rally_number, 1);
    }

    #[test]
    fn test_reconfirm_resets_rotation_not_score() {
        let mut session = ready_session();
        session
            .record_rally(ResultCategory::ServeMiss, Side::Opponent)
            .unwrap();
        session.record_rally(ResultCategory::BPass, Side::Own).unwrap();

        session
            .confirm_serve_order(&[9, 8, 7, 6, 5, 4], &THEIRS)
            .unwrap();

        let board = session.state().scoreboard;
        assert_eq!(board.rotations, Rotations::default());
        assert_eq!(board.team_score, 1);
        assert_eq!(board.opponent_score, 1);
        assert_eq!(board.rally_number, 3);
        assert_eq!(session.current_server().map(PlayerId::get), Some(9));
    }
}
