//! Seed ranking over team standings.
//!
//! Teams with at least one win form the winners group, ordered by fewest
//! points conceded. Teams without a win form the losers group, ordered by
//! most points scored. Winners precede losers and seeds are 1-based. Both
//! sorts are stable, so ties keep the order the teams were listed in.

use std::cmp::Ordering;

use super::team::Team;

/// Winners group order: ascending `points_lost`
pub fn winners_order(a: &Team, b: &Team) -> Ordering {
    a.points_lost().cmp(&b.points_lost())
}

/// Losers group order: descending `points_won`
pub fn losers_order(a: &Team, b: &Team) -> Ordering {
    b.points_won().cmp(&a.points_won())
}

/// Orders teams into bracket position, best seed first
pub fn rank(teams: Vec<Team>) -> Vec<Team> {
    let (mut winners, mut losers): (Vec<Team>, Vec<Team>) =
        teams.into_iter().partition(Team::has_won);

    winners.sort_by(winners_order);
    losers.sort_by(losers_order);

    winners.extend(losers);
    winners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{StatsDelta, TeamId};

    fn team(id: TeamId, wins: i64, points_won: i64, points_lost: i64) -> Team {
        let (mut team, _) = Team::register(id, "Alice", "Bob").unwrap();
        team.apply(&StatsDelta {
            wins,
            losses: 0,
            points_won,
            points_lost,
        })
        .unwrap();
        team
    }

    fn ids(teams: &[Team]) -> Vec<TeamId> {
        teams.iter().map(Team::team_id).collect()
    }

    #[test]
    fn no_teams_ranks_nothing() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn winners_before_losers() {
        let a = team(1, 1, 0, 2);
        let b = team(2, 1, 0, 5);
        let c = team(3, 0, 9, 0);

        let ranked = rank(vec![c, b, a]);

        assert_eq!(ids(&ranked), vec![1, 2, 3]);
    }

    #[test]
    fn winners_ignore_points_won() {
        let heavy_scorer = team(1, 3, 99, 10);
        let tight_defence = team(2, 1, 0, 3);

        assert_eq!(ids(&rank(vec![heavy_scorer, tight_defence])), vec![2, 1]);
    }

    #[test]
    fn all_losers_rank_by_points_won_descending() {
        let teams = vec![team(1, 0, 3, 0), team(2, 0, 8, 0), team(3, 0, 5, 0)];

        assert_eq!(ids(&rank(teams)), vec![2, 3, 1]);
    }

    #[test]
    fn ties_keep_listing_order() {
        let teams = vec![
            team(4, 0, 7, 0),
            team(1, 0, 7, 0),
            team(3, 2, 0, 6),
            team(2, 1, 0, 6),
        ];

        assert_eq!(ids(&rank(teams)), vec![3, 2, 4, 1]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let teams = vec![team(1, 0, 4, 0), team(2, 1, 0, 9), team(3, 2, 0, 1)];

        let once = rank(teams);
        let twice = rank(once.clone());

        assert_eq!(ids(&once), ids(&twice));
    }
}
