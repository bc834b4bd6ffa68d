//! Instructor and cohort joins
//!
//! Instructors and cohorts are related through the module number they share,
//! and through the topics instructors teach and cohorts study.

use crate::datasets::{Cohort, Instructor};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorStudents {
    pub name: String,
    pub student_count: u32,
}

/// Student count of the cohort in each instructor's module.
///
/// When several cohorts share a module the last one in dataset order wins;
/// counts are not combined. An instructor whose module has no cohort fails
/// with [`Error::ReferenceNotFound`].
pub fn students_for_each_instructor(
    instructors: &[Instructor],
    cohorts: &[Cohort],
) -> Result<Vec<InstructorStudents>> {
    instructors
        .iter()
        .map(|instructor| -> Result<InstructorStudents> {
            let cohort = cohorts
                .iter()
                .rev()
                .find(|cohort| cohort.module == instructor.module)
                .ok_or_else(|| {
                    Error::reference_not_found("cohorts", format!("module {}", instructor.module))
                })?;
            Ok(InstructorStudents {
                name: instructor.name.clone(),
                student_count: cohort.student_count,
            })
        })
        .collect()
}

/// Students per instructor for each cohort, keyed by cohort label.
///
/// The ratio is not rounded. A cohort whose module has no instructors fails
/// with [`Error::DivisionByZero`].
pub fn students_per_instructor(
    cohorts: &[Cohort],
    instructors: &[Instructor],
) -> Result<BTreeMap<String, f64>> {
    cohorts
        .iter()
        .map(|cohort| {
            let teacher_count = instructors
                .iter()
                .filter(|instructor| instructor.module == cohort.module)
                .count();
            if teacher_count == 0 {
                return Err(Error::DivisionByZero(format!(
                    "{} has no instructors in module {}",
                    cohort.label(),
                    cohort.module
                )));
            }
            Ok((
                cohort.label(),
                f64::from(cohort.student_count) / teacher_count as f64,
            ))
        })
        .collect()
}

/// Modules each instructor could teach: every module whose cohort studies
/// a topic the instructor teaches, ascending and without repeats.
pub fn modules_per_teacher(
    instructors: &[Instructor],
    cohorts: &[Cohort],
) -> BTreeMap<String, Vec<u32>> {
    instructors
        .iter()
        .map(|instructor| {
            let modules: BTreeSet<u32> = instructor
                .teaches
                .iter()
                .flat_map(|topic| {
                    cohorts
                        .iter()
                        .filter(move |cohort| cohort.curriculum.contains(topic))
                })
                .map(|cohort| cohort.module)
                .collect();
            (instructor.name.clone(), modules.into_iter().collect())
        })
        .collect()
}

/// Instructors able to teach each curriculum topic, in instructor order.
///
/// Topics are visited cohort by cohort; a topic seen again in a later cohort
/// replaces the earlier entry rather than merging into it.
pub fn curriculum_per_teacher(
    cohorts: &[Cohort],
    instructors: &[Instructor],
) -> BTreeMap<String, Vec<String>> {
    let mut curriculum = BTreeMap::new();
    for topic in cohorts.iter().flat_map(|cohort| &cohort.curriculum) {
        let teachers: Vec<String> = instructors
            .iter()
            .filter(|instructor| instructor.teaches.contains(topic))
            .map(|instructor| instructor.name.clone())
            .collect();
        curriculum.insert(topic.clone(), teachers);
    }
    curriculum
}
