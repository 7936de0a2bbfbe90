use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_METER_RATING, METER_COUNT, METER_SCALE_DIVISOR};

/// Opaque identifier of a recommendable service in the catalog.
pub type ServiceId = String;

/// The ten named dimensions of the 3x10D life-situation questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeSituationMeter {
    WorkingStudying,
    Family,
    Friends,
    Health,
    ImprovementOfStrengths,
    Housing,
    Finance,
    SelfEsteem,
    Resilience,
    LifeSatisfaction,
}

impl LifeSituationMeter {
    /// All meters, in the fixed vector order shared with the ETL pipeline.
    pub const ALL: [LifeSituationMeter; METER_COUNT] = [
        LifeSituationMeter::WorkingStudying,
        LifeSituationMeter::Family,
        LifeSituationMeter::Friends,
        LifeSituationMeter::Health,
        LifeSituationMeter::ImprovementOfStrengths,
        LifeSituationMeter::Housing,
        LifeSituationMeter::Finance,
        LifeSituationMeter::SelfEsteem,
        LifeSituationMeter::Resilience,
        LifeSituationMeter::LifeSatisfaction,
    ];

    /// Position of this meter in a [`ServiceVector`].
    pub fn index(self) -> usize {
        match self {
            LifeSituationMeter::WorkingStudying => 0,
            LifeSituationMeter::Family => 1,
            LifeSituationMeter::Friends => 2,
            LifeSituationMeter::Health => 3,
            LifeSituationMeter::ImprovementOfStrengths => 4,
            LifeSituationMeter::Housing => 5,
            LifeSituationMeter::Finance => 6,
            LifeSituationMeter::SelfEsteem => 7,
            LifeSituationMeter::Resilience => 8,
            LifeSituationMeter::LifeSatisfaction => 9,
        }
    }

    /// Snake-case name used in API payloads and database columns.
    pub fn as_str(self) -> &'static str {
        match self {
            LifeSituationMeter::WorkingStudying => "working_studying",
            LifeSituationMeter::Family => "family",
            LifeSituationMeter::Friends => "friends",
            LifeSituationMeter::Health => "health",
            LifeSituationMeter::ImprovementOfStrengths => "improvement_of_strengths",
            LifeSituationMeter::Housing => "housing",
            LifeSituationMeter::Finance => "finance",
            LifeSituationMeter::SelfEsteem => "self_esteem",
            LifeSituationMeter::Resilience => "resilience",
            LifeSituationMeter::LifeSatisfaction => "life_satisfaction",
        }
    }

    /// Finnish keyword expansion used to seed free-text search from a
    /// structured meter.
    pub fn search_terms(self) -> &'static str {
        match self {
            LifeSituationMeter::WorkingStudying => {
                "koulu tukiopetus preppauskurssit arvosana mentorointi opintoneuvonta \
                 koulunkäyntiavustaja oppilaanohjaus erityisopetus ammatinvalinta \
                 tulevaisuudensuunnitelma"
            }
            LifeSituationMeter::Family => {
                "perhe perhesuhteet perheneuvonta perheterapia isä äiti vanhemmat sisarukset"
            }
            LifeSituationMeter::Friends => "yksinäisyys ystävät kaverit kaveripiiri vertaistuki",
            LifeSituationMeter::Health => {
                "sairaanhoito terveydenhuolto hammashoito taudit terveys terveystieto yleiskunto \
                 liikunta ruokavalio lihominen ylipaino"
            }
            LifeSituationMeter::ImprovementOfStrengths => {
                "kehittäminen harrastukset harrastustoiminta harrastusmahdollisuus taide \
                 taideopetus kuvataide musiikki yhdistykset urheilu liikunta työnhakutaito \
                 päätöksenteko"
            }
            LifeSituationMeter::Housing => {
                "asuminen asunto asuinpaikka asunto asuntola takuuvuokra"
            }
            LifeSituationMeter::Finance => {
                "raha velkaneuvonta köyhyys rahapula toimeentulotuki maksuhäiriö, \
                 elämänhallinta vähävarainen"
            }
            LifeSituationMeter::SelfEsteem => "itsetunto harrastukset koulupsykologi tukihenkilö",
            LifeSituationMeter::Resilience => "vaikeus voittaminen psykologi motivaatio valmennus",
            LifeSituationMeter::LifeSatisfaction => {
                "tyytyväisyys elämä mielenterveys masennus ahdistus"
            }
        }
    }
}

/// Precomputed life-situation vector of one catalog service.
///
/// Values are finite and non-negative; they are produced by the offline ETL
/// and read-only inside the ranking core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceVector {
    pub service_id: ServiceId,
    /// One value per meter, in [`LifeSituationMeter::ALL`] order.
    pub values: [f32; METER_COUNT],
}

impl ServiceVector {
    pub fn new(service_id: impl Into<ServiceId>, values: [f32; METER_COUNT]) -> Self {
        Self {
            service_id: service_id.into(),
            values,
        }
    }
}

/// Raw 3x10D questionnaire answers: one or more integer ratings (0..=10)
/// per answered meter. Meters the user did not answer are absent, never
/// zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMeters(BTreeMap<LifeSituationMeter, Vec<u8>>);

impl QueryMeters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the raw ratings for one meter, replacing earlier values.
    pub fn insert(&mut self, meter: LifeSituationMeter, ratings: Vec<u8>) {
        self.0.insert(meter, ratings);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Transforms raw ratings into the query vector.
    ///
    /// Each meter's ratings are averaged, then rescaled and inverted with
    /// `1 - mean / 10.1`, so a low life-situation rating yields a high
    /// query weight. Ratings above [`MAX_METER_RATING`] are clamped to it;
    /// meters with no ratings are dropped.
    pub fn transform(&self) -> Vec<(LifeSituationMeter, f32)> {
        self.0
            .iter()
            .filter(|(_, ratings)| !ratings.is_empty())
            .map(|(&meter, ratings)| {
                let mean = ratings
                    .iter()
                    .map(|&r| f32::from(r.min(MAX_METER_RATING)))
                    .sum::<f32>()
                    / ratings.len() as f32;
                (meter, 1.0 - mean / METER_SCALE_DIVISOR)
            })
            .collect()
    }
}

impl FromIterator<(LifeSituationMeter, Vec<u8>)> for QueryMeters {
    fn from_iter<I: IntoIterator<Item = (LifeSituationMeter, Vec<u8>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One service with its similarity score, as produced by the rankers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredService {
    pub service_id: ServiceId,
    pub score: f32,
}
