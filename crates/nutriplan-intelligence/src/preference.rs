// ABOUTME: Per-user meal preference model learned from ratings (TF-IDF + multinomial naive Bayes)
// ABOUTME: Models are kept in a keyed cache with one RwLock per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Preference Model
//!
//! Each meal is reduced to a bag of words from its name and tags:
//! lower-cased, at least two characters, English stop-words removed. Term
//! counts are TF-IDF weighted (smoothed IDF, L2-normalized rows) and fed to a
//! multinomial naive Bayes classifier with Laplace smoothing. The target
//! class is "liked", i.e. a rating strictly above 3.
//!
//! A model is only fitted when the training set contains both liked and
//! not-liked examples; until then every prediction is the neutral 0.5.
//!
//! Per-user models live in [`PreferenceModelCache`], a `DashMap` keyed by
//! user id whose values are individually locked, so training one user's
//! model never blocks predictions for another.

use dashmap::DashMap;
use nutriplan_core::constants::feedback::{MODEL_LIKE_RATING_FLOOR, NEUTRAL_LIKE_SCORE};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::Meal;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Laplace smoothing for the naive Bayes feature counts
const SMOOTHING_ALPHA: f64 = 1.0;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "been", "before", "being", "below", "between", "both", "but", "by", "can", "could",
    "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "if", "in", "into",
    "is", "it", "its", "itself", "just", "me", "more", "most", "my", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours",
];

/// Words of a meal's name and tags used as model features
#[must_use]
pub fn meal_tokens(meal: &Meal) -> Vec<String> {
    let mut text = meal.name.clone();
    for tag in &meal.tags {
        text.push(' ');
        text.push_str(tag);
    }
    tokenize(&text)
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| word.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

/// Whether a rating counts as "liked" for training
#[must_use]
pub fn is_liked_rating(rating: f64) -> bool {
    rating > MODEL_LIKE_RATING_FLOOR
}

#[derive(Debug, Clone, PartialEq)]
struct FittedModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    // index 0 = not liked, 1 = liked
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
}

impl FittedModel {
    fn vectorize(&self, tokens: &[String]) -> Vec<(usize, f64)> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_default() += 1.0;
            }
        }

        let mut weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();
        let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut weighted {
                *weight /= norm;
            }
        }
        weighted
    }

    fn like_probability(&self, tokens: &[String]) -> f64 {
        let features = self.vectorize(tokens);
        let joint = |class: usize| {
            self.class_log_prior[class]
                + features
                    .iter()
                    .map(|&(index, weight)| weight * self.feature_log_prob[class][index])
                    .sum::<f64>()
        };
        let (not_liked, liked) = (joint(0), joint(1));
        let max = not_liked.max(liked);
        let liked_mass = (liked - max).exp();
        liked_mass / ((not_liked - max).exp() + liked_mass)
    }
}

/// One user's preference classifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceModel {
    fitted: Option<FittedModel>,
}

impl PreferenceModel {
    /// Unfitted model predicting the neutral score
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the model has been trained on both classes
    #[must_use]
    pub const fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Train on `(meal, rating)` pairs
    ///
    /// Returns false and keeps the current state when the examples do not
    /// contain both liked and not-liked ratings.
    pub fn fit<'m, I>(&mut self, examples: I) -> bool
    where
        I: IntoIterator<Item = (&'m Meal, f64)>,
    {
        let documents: Vec<(Vec<String>, usize)> = examples
            .into_iter()
            .map(|(meal, rating)| (meal_tokens(meal), usize::from(is_liked_rating(rating))))
            .collect();

        let mut class_counts = [0_usize; 2];
        for (_, class) in &documents {
            class_counts[*class] += 1;
        }
        if class_counts.contains(&0) {
            return false;
        }

        let mut vocabulary = BTreeMap::new();
        for (tokens, _) in &documents {
            for token in tokens {
                let next = vocabulary.len();
                vocabulary.entry(token.clone()).or_insert(next);
            }
        }
        if vocabulary.is_empty() {
            return false;
        }

        let n_docs = documents.len() as f64;
        let mut document_frequency = vec![0.0; vocabulary.len()];
        for (tokens, _) in &documents {
            let mut seen: Vec<usize> = tokens.iter().filter_map(|t| vocabulary.get(t).copied()).collect();
            seen.sort_unstable();
            seen.dedup();
            for index in seen {
                document_frequency[index] += 1.0;
            }
        }
        let idf = document_frequency
            .iter()
            .map(|df| ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0)
            .collect();

        let mut model = FittedModel {
            vocabulary,
            idf,
            class_log_prior: [0.0; 2],
            feature_log_prob: [Vec::new(), Vec::new()],
        };

        let width = model.vocabulary.len();
        let mut feature_counts = [vec![SMOOTHING_ALPHA; width], vec![SMOOTHING_ALPHA; width]];
        for (tokens, class) in &documents {
            for (index, weight) in model.vectorize(tokens) {
                feature_counts[*class][index] += weight;
            }
        }

        for class in 0..2 {
            model.class_log_prior[class] = (class_counts[class] as f64 / n_docs).ln();
            let total: f64 = feature_counts[class].iter().sum();
            model.feature_log_prob[class] = feature_counts[class]
                .iter()
                .map(|count| (count / total).ln())
                .collect();
        }

        self.fitted = Some(model);
        true
    }

    /// Probability in `[0, 1]` that the user likes `meal`
    #[must_use]
    pub fn predict_like(&self, meal: &Meal) -> f64 {
        self.fitted
            .as_ref()
            .map_or(NEUTRAL_LIKE_SCORE, |model| model.like_probability(&meal_tokens(meal)))
    }

    /// Tokens with the highest liked-class log probability, best first
    ///
    /// Empty for an unfitted model.
    #[must_use]
    pub fn top_features(&self, n: usize) -> Vec<(String, f64)> {
        let Some(model) = &self.fitted else {
            return Vec::new();
        };
        let mut features: Vec<(String, f64)> = model
            .vocabulary
            .iter()
            .map(|(token, &index)| (token.clone(), model.feature_log_prob[1][index]))
            .collect();
        features.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        features.truncate(n);
        features
    }
}

/// Per-user preference models with an independent lock per user
#[derive(Debug, Default)]
pub struct PreferenceModelCache {
    models: DashMap<Uuid, Arc<RwLock<PreferenceModel>>>,
}

impl PreferenceModelCache {
    /// Empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn model(&self, user_id: Uuid) -> Arc<RwLock<PreferenceModel>> {
        Arc::clone(self.models.entry(user_id).or_default().value())
    }

    /// Retrain `user_id`'s model; returns whether it is now fitted on this data
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the user's model lock is poisoned.
    pub fn train<'m, I>(&self, user_id: Uuid, examples: I) -> AppResult<bool>
    where
        I: IntoIterator<Item = (&'m Meal, f64)>,
    {
        let model = self.model(user_id);
        let mut guard = model
            .write()
            .map_err(|_| AppError::internal(format!("preference model lock poisoned for {user_id}")))?;
        let trained = guard.fit(examples);
        drop(guard);

        if trained {
            tracing::info!(user_id = %user_id, "preference model trained");
        } else {
            tracing::info!(
                user_id = %user_id,
                "insufficient or non-varied feedback, preference model not trained"
            );
        }
        Ok(trained)
    }

    /// Like probability for `meal`, neutral when the user has no fitted model
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the user's model lock is poisoned.
    pub fn predict(&self, user_id: Uuid, meal: &Meal) -> AppResult<f64> {
        let Some(model) = self.models.get(&user_id).map(|entry| Arc::clone(entry.value())) else {
            return Ok(NEUTRAL_LIKE_SCORE);
        };
        let guard = model
            .read()
            .map_err(|_| AppError::internal(format!("preference model lock poisoned for {user_id}")))?;
        Ok(guard.predict_like(meal))
    }

    /// Top liked-class features, or `None` while the model is untrained
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the user's model lock is poisoned.
    pub fn top_features(&self, user_id: Uuid, n: usize) -> AppResult<Option<Vec<(String, f64)>>> {
        let Some(model) = self.models.get(&user_id).map(|entry| Arc::clone(entry.value())) else {
            return Ok(None);
        };
        let guard = model
            .read()
            .map_err(|_| AppError::internal(format!("preference model lock poisoned for {user_id}")))?;
        Ok(guard.is_fitted().then(|| guard.top_features(n)))
    }

    /// Drop a user's model
    pub fn evict(&self, user_id: Uuid) {
        self.models.remove(&user_id);
    }
}
