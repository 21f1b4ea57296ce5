use log::info;
use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

/// Série bornée de mesures : les plus anciennes sont évincées.
#[derive(Debug, Default)]
struct Series {
    values: VecDeque<f32>,
}

impl Series {
    fn push(&mut self, value: f32, max_samples: usize) {
        if self.values.len() >= max_samples {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// (moyenne, min, max)
    fn summary(&self) -> Option<(f32, f32, f32)> {
        if self.values.is_empty() {
            return None;
        }
        let avg = self.values.iter().sum::<f32>() / self.values.len() as f32;
        let min = self.values.iter().copied().fold(f32::MAX, f32::min);
        let max = self.values.iter().copied().fold(f32::MIN, f32::max);
        Some((avg, min, max))
    }
}

/// Profiler mono-thread de la boucle de frames : durées de blocs (ms) et
/// métriques scalaires (nombre de particules, de fusées…).
#[derive(Debug)]
pub struct Profiler {
    timings: BTreeMap<&'static str, Series>,
    metrics: BTreeMap<&'static str, Series>,
    max_samples: usize,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            timings: BTreeMap::new(),
            metrics: BTreeMap::new(),
            max_samples: max_samples.max(1),
        }
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&mut self, label: &'static str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;
        self.timings
            .entry(label)
            .or_default()
            .push(dt, self.max_samples);
        result
    }

    pub fn record_metric(&mut self, label: &'static str, value: usize) {
        self.metrics
            .entry(label)
            .or_default()
            .push(value as f32, self.max_samples);
    }

    pub fn timing_summary(&self, label: &str) -> Option<(f32, f32, f32)> {
        self.timings.get(label).and_then(Series::summary)
    }

    pub fn metric_summary(&self, label: &str) -> Option<(f32, f32, f32)> {
        self.metrics.get(label).and_then(Series::summary)
    }

    /// Log toutes les mesures vers l’info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str) {
        for (label, series) in &self.timings {
            if let Some((avg, min, max)) = series.summary() {
                info!(
                    target: target,
                    "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                    label, avg, min, max
                );
            }
        }
        for (label, series) in &self.metrics {
            if let Some((avg, min, max)) = series.summary() {
                info!(target: target, "{label}: avg={avg:.1}, min={min}, max={max}");
            }
        }
    }

    pub fn reset(&mut self) {
        self.timings.clear();
        self.metrics.clear();
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!());
    };
}
