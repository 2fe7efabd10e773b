/// Combined survey answers for one unordered participant pair: max of the
/// reciprocal friendship reports, mean of the reciprocal proximity estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyRow {
    pub id1: usize,
    pub id2: usize,
    pub close_friends: f64,
    pub inlab_proximity: f64,
    pub outlab_proximity: f64,
}

impl SurveyRow {
    /// Rows where nobody reported anything carry no information and are
    /// dropped from the output.
    pub fn is_all_zero(&self) -> bool {
        self.close_friends == 0.0 && self.inlab_proximity == 0.0 && self.outlab_proximity == 0.0
    }
}
