use itertools::Itertools;

use crate::data::{NetworkSurvey, SubjectStore};
use crate::domain::SurveyRow;
use crate::utils::maths_utils::{max_or_zero, mean_or_zero};

/// Map survey row order onto contiguous subject ids. Rows whose hashed
/// number doesn't resolve to a valid subject are left out, which also keeps
/// dropped participants from re-entering through the survey.
fn survey_id_table(network: &NetworkSurvey, store: &SubjectStore) -> Vec<(usize, usize)> {
    network
        .sub_sort
        .iter()
        .enumerate()
        .filter_map(|(row, hashed)| {
            store
                .lookup_hashed_number(*hashed)
                .map(|subject_id| (row, subject_id))
        })
        .collect()
}

fn matrix_get(matrix: &[Vec<Option<f64>>], i: usize, j: usize) -> Option<f64> {
    matrix.get(i).and_then(|row| row.get(j)).copied().flatten()
}

/// One row per unordered participant pair: the max of the reciprocal
/// friendship reports and the mean of the reciprocal in-lab/out-lab
/// proximity estimates, with missing answers counted as 0. Pairs where all
/// three come out 0 carry no information and are dropped.
pub fn extract_survey_rows(network: &NetworkSurvey, store: &SubjectStore) -> Vec<SurveyRow> {
    let table = survey_id_table(network, store);
    log::info!(
        "{} of {} survey participants map to valid subjects",
        table.len(),
        network.sub_sort.len()
    );

    let mut rows = Vec::new();
    for (&(i, id1), &(j, id2)) in table.iter().tuple_combinations() {
        let row = SurveyRow {
            id1,
            id2,
            close_friends: max_or_zero(
                matrix_get(&network.friends, i, j),
                matrix_get(&network.friends, j, i),
            ),
            inlab_proximity: mean_or_zero(
                matrix_get(&network.lab, i, j),
                matrix_get(&network.lab, j, i),
            ),
            outlab_proximity: mean_or_zero(
                matrix_get(&network.outlab, i, j),
                matrix_get(&network.outlab, j, i),
            ),
        };
        if !row.is_all_zero() {
            rows.push(row);
        }
    }

    log::info!("{} survey rows with at least one non-zero answer", rows.len());
    rows
}
