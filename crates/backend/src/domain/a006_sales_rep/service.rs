use contracts::domain::a006_sales_rep::SalesRep;
use contracts::shared::format::calculate_percentage;

/// Reps ordered by conversion rate, best first. The input is left untouched.
pub fn get_top_performers(reps: &[SalesRep], limit: usize) -> Vec<&SalesRep> {
    let mut sorted: Vec<&SalesRep> = reps.iter().collect();
    sorted.sort_by(|a, b| b.conversion.cmp(&a.conversion));
    sorted.truncate(limit);
    sorted
}

/// Target achievement of a rep, whole percent
pub fn target_achievement(rep: &SalesRep) -> i64 {
    calculate_percentage(rep.actual as f64, rep.target as f64)
}
