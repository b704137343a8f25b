use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Deserialize};

use super::team::{Team, TeamRole};


/// Speaking position in a British Parliamentary debate. Each team role owns
/// two positions, first speaker then second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DebatePosition {
    #[serde(rename = "Prime Minister")]
    PrimeMinister,
    #[serde(rename = "Deputy Prime Minister")]
    DeputyPrimeMinister,
    #[serde(rename = "Leader of Opposition")]
    LeaderOfOpposition,
    #[serde(rename = "Deputy Leader of Opposition")]
    DeputyLeaderOfOpposition,
    #[serde(rename = "Member of Government")]
    MemberOfGovernment,
    #[serde(rename = "Government Whip")]
    GovernmentWhip,
    #[serde(rename = "Member of Opposition")]
    MemberOfOpposition,
    #[serde(rename = "Opposition Whip")]
    OppositionWhip,
}

impl DebatePosition {
    pub fn for_role(role: TeamRole) -> [DebatePosition; 2] {
        match role {
            TeamRole::OpeningGovernment => [DebatePosition::PrimeMinister, DebatePosition::DeputyPrimeMinister],
            TeamRole::OpeningOpposition => [DebatePosition::LeaderOfOpposition, DebatePosition::DeputyLeaderOfOpposition],
            TeamRole::ClosingGovernment => [DebatePosition::MemberOfGovernment, DebatePosition::GovernmentWhip],
            TeamRole::ClosingOpposition => [DebatePosition::MemberOfOpposition, DebatePosition::OppositionWhip],
        }
    }

    pub fn role(&self) -> TeamRole {
        match self {
            DebatePosition::PrimeMinister | DebatePosition::DeputyPrimeMinister => TeamRole::OpeningGovernment,
            DebatePosition::LeaderOfOpposition | DebatePosition::DeputyLeaderOfOpposition => TeamRole::OpeningOpposition,
            DebatePosition::MemberOfGovernment | DebatePosition::GovernmentWhip => TeamRole::ClosingGovernment,
            DebatePosition::MemberOfOpposition | DebatePosition::OppositionWhip => TeamRole::ClosingOpposition,
        }
    }

    /// The other position of the same team.
    pub fn partner(&self) -> DebatePosition {
        let [first, second] = Self::for_role(self.role());
        if *self == first { second } else { first }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DebatePosition::PrimeMinister => "Prime Minister",
            DebatePosition::DeputyPrimeMinister => "Deputy Prime Minister",
            DebatePosition::LeaderOfOpposition => "Leader of Opposition",
            DebatePosition::DeputyLeaderOfOpposition => "Deputy Leader of Opposition",
            DebatePosition::MemberOfGovernment => "Member of Government",
            DebatePosition::GovernmentWhip => "Government Whip",
            DebatePosition::MemberOfOpposition => "Member of Opposition",
            DebatePosition::OppositionWhip => "Opposition Whip",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            DebatePosition::PrimeMinister => "PM",
            DebatePosition::DeputyPrimeMinister => "DPM",
            DebatePosition::LeaderOfOpposition => "LO",
            DebatePosition::DeputyLeaderOfOpposition => "DLO",
            DebatePosition::MemberOfGovernment => "MG",
            DebatePosition::GovernmentWhip => "GW",
            DebatePosition::MemberOfOpposition => "MO",
            DebatePosition::OppositionWhip => "OW",
        }
    }
}

impl fmt::Display for DebatePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.abbreviation())
    }
}

/// A team taking part in a recorded debate, with the speaker id chosen for
/// each of its positions.
///
/// An iron man team has one speaker giving both speeches.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionTeam {
    #[serde(flatten)]
    pub team: Team,
    #[serde(default)]
    pub positions: BTreeMap<DebatePosition, String>,
    #[serde(default)]
    pub iron_man: bool,
}

impl SessionTeam {
    pub fn new(team: Team) -> Self {
        SessionTeam {
            team,
            positions: BTreeMap::new(),
            iron_man: false,
        }
    }

    pub fn speaker_at(&self, position: DebatePosition) -> Option<&str> {
        self.positions.get(&position).map(String::as_str)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Speech {
    pub speaker_id: String,
    pub team_id: String,
    pub position: DebatePosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OralAdjudication {
    pub judge_id: String,
    pub round_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Speeches and the oral adjudication recorded for one room of a round.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DebateSession {
    pub round_id: String,
    pub topic: String,
    #[serde(default)]
    pub teams: Vec<SessionTeam>,
    #[serde(default)]
    pub speeches: Vec<Speech>,
    #[serde(default)]
    pub oral_adjudication: Option<OralAdjudication>,
}

impl DebateSession {
    pub fn new<R, T>(round_id: R, topic: T, teams: Vec<Team>) -> Self where R: Into<String>, T: Into<String> {
        DebateSession {
            round_id: round_id.into(),
            topic: topic.into(),
            teams: teams.into_iter().map(SessionTeam::new).collect(),
            speeches: vec![],
            oral_adjudication: None,
        }
    }

    pub fn team(&self, team_id: &str) -> Option<&SessionTeam> {
        self.teams.iter().find(|t| t.team.id == team_id)
    }

    pub fn team_mut(&mut self, team_id: &str) -> Option<&mut SessionTeam> {
        self.teams.iter_mut().find(|t| t.team.id == team_id)
    }

    pub fn speeches_for<'a>(&'a self, team_id: &'a str) -> impl Iterator<Item = &'a Speech> + 'a {
        self.speeches.iter().filter(move |s| s.team_id == team_id)
    }
}
