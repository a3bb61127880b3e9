use crate::classifiers::ClassStatistics;
use crate::classifiers::bayes::{BernoulliStatistics, GaussianStatistics, MultinomialStatistics};
use crate::core::Dataset;
use crate::evaluation::Priors;
use crate::tasks::EvaluationOutcome;
use crate::utils::math::gaussian_coefficient;
use std::fmt::{Display, Formatter, Result};

const WIDTH: usize = 72;

/// Section-by-section narration of how an [`EvaluationOutcome`] was reached.
pub struct DerivationTrace<'a> {
    title: Option<&'a str>,
    dataset: &'a Dataset,
    outcome: &'a EvaluationOutcome,
}

impl<'a> DerivationTrace<'a> {
    pub fn new(dataset: &'a Dataset, outcome: &'a EvaluationOutcome) -> Self {
        Self {
            title: None,
            dataset,
            outcome,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    fn feature(&self, index: usize) -> &str {
        self.dataset.header().feature_name(index).unwrap_or("?")
    }

    fn label(&self, class_index: usize) -> &str {
        &self.outcome.classes[class_index].label
    }
}

fn section(f: &mut Formatter<'_>, number: usize, title: &str) -> Result {
    writeln!(f)?;
    writeln!(f, "{}", "-".repeat(WIDTH))?;
    writeln!(f, "Section {number}: {title}")?;
    writeln!(f)
}

fn pct(p: f64) -> String {
    format!("{:.4}%", p * 100.0)
}

fn num(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{x:.0}")
    } else {
        format!("{x}")
    }
}

impl Display for DerivationTrace<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", "=".repeat(WIDTH))?;
        match self.title {
            Some(t) => writeln!(f, "{t}")?,
            None => writeln!(
                f,
                "{} Naive Bayes on '{}'",
                self.outcome.model, self.outcome.relation
            )?,
        }
        writeln!(f, "{}", "=".repeat(WIDTH))?;

        self.training_data(f)?;
        section(f, 2, "Class statistics")?;
        for (c, stats) in self.outcome.statistics.iter().enumerate() {
            match stats {
                ClassStatistics::Bernoulli(s) => self.bernoulli_statistics(f, c, s)?,
                ClassStatistics::Gaussian(s) => self.gaussian_statistics(f, c, s)?,
                ClassStatistics::Multinomial(s) => self.multinomial_statistics(f, c, s)?,
            }
        }

        section(f, 3, "Likelihood P(x | class)")?;
        for (c, stats) in self.outcome.statistics.iter().enumerate() {
            match stats {
                ClassStatistics::Bernoulli(s) => self.bernoulli_likelihood(f, c, s)?,
                ClassStatistics::Gaussian(s) => self.gaussian_likelihood(f, c, s)?,
                ClassStatistics::Multinomial(s) => self.multinomial_likelihood(f, c, s)?,
            }
        }

        self.priors(f)?;
        if self.outcome.log_space {
            self.log_posterior(f)?;
        } else {
            self.direct_posterior(f)?;
        }
        self.decision(f)?;
        self.word_analysis(f)?;
        writeln!(f, "{}", "=".repeat(WIDTH))
    }
}

impl DerivationTrace<'_> {
    fn training_data(&self, f: &mut Formatter<'_>) -> Result {
        section(f, 1, "Training data")?;
        let header = self.dataset.header();
        let names = header.feature_names.join(" | ");
        for c in 0..header.number_of_classes() {
            writeln!(f, "{} ({} rows):", self.label(c), self.dataset.class_rows(c).len())?;
            writeln!(f, "  # | {names}")?;
            for (i, row) in self.dataset.class_rows(c).iter().enumerate() {
                let vals: Vec<String> = row.iter().map(|v| num(*v)).collect();
                writeln!(f, "  {} | {}", i + 1, vals.join(" | "))?;
            }
            writeln!(f)?;
        }
        let query: Vec<String> = self
            .outcome
            .query
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{}={}", self.feature(i), num(*v)))
            .collect();
        writeln!(f, "Query: {}", query.join(", "))
    }

    fn bernoulli_statistics(&self, f: &mut Formatter<'_>, c: usize, s: &BernoulliStatistics) -> Result {
        let label = self.label(c);
        let n = s.training_rows;
        writeln!(f, "{label}: add-one smoothing, (count + 1) / (n + 2)")?;
        for (i, (&count, &p)) in s.presence_counts.iter().zip(&s.presence_probabilities).enumerate() {
            writeln!(
                f,
                "  P({}=1 | {label}) = ({count} + 1) / ({n} + 2) = {} / {} = {p:.4}",
                self.feature(i),
                count + 1,
                n + 2
            )?;
        }
        writeln!(f)
    }

    fn gaussian_statistics(&self, f: &mut Formatter<'_>, c: usize, s: &GaussianStatistics) -> Result {
        let label = self.label(c);
        let rows = self.dataset.class_rows(c);
        let n = s.training_rows;
        writeln!(f, "{label}: mean and population standard deviation")?;
        for i in 0..s.means.len() {
            let sum: f64 = rows.iter().map(|r| r[i]).sum();
            let name = self.feature(i);
            writeln!(
                f,
                "  μ({name} | {label}) = Σx / n = {} / {n} = {:.4}",
                num(sum),
                s.means[i]
            )?;
            if s.floored[i] {
                writeln!(
                    f,
                    "  σ({name} | {label}) = 0, floor {} used instead",
                    s.std_devs[i]
                )?;
            } else {
                writeln!(
                    f,
                    "  σ({name} | {label}) = √[Σ(x − μ)² / n] = {:.4}",
                    s.std_devs[i]
                )?;
            }
        }
        writeln!(f)
    }

    fn multinomial_statistics(
        &self,
        f: &mut Formatter<'_>,
        c: usize,
        s: &MultinomialStatistics,
    ) -> Result {
        let label = self.label(c);
        let v = s.probabilities.len();
        let denominator = s.total_words as f64 + s.alpha * v as f64;
        writeln!(
            f,
            "{label}: {} words over {} documents, α = {}, V = {v}",
            s.total_words,
            s.training_rows,
            num(s.alpha)
        )?;
        for (i, (&count, &p)) in s.word_counts.iter().zip(&s.probabilities).enumerate() {
            writeln!(
                f,
                "  P('{}' | {label}) = ({count} + {}) / ({} + {} × {v}) = {} / {} = {p:.4}",
                self.feature(i),
                num(s.alpha),
                s.total_words,
                num(s.alpha),
                num(count as f64 + s.alpha),
                num(denominator)
            )?;
        }
        writeln!(f)
    }

    fn bernoulli_likelihood(&self, f: &mut Formatter<'_>, c: usize, s: &BernoulliStatistics) -> Result {
        let label = self.label(c);
        let terms = s
            .feature_likelihoods(&self.outcome.query)
            .map_err(|_| std::fmt::Error)?;
        writeln!(f, "{label}:")?;
        for (i, (&x, &p)) in self.outcome.query.iter().zip(&s.presence_probabilities).enumerate() {
            let name = self.feature(i);
            if x == 1.0 {
                writeln!(f, "  P({name}=1 | {label}) = {p:.4}")?;
            } else {
                writeln!(
                    f,
                    "  P({name}=0 | {label}) = 1 − {p:.4} = {:.4}",
                    terms[i]
                )?;
            }
        }
        let factors: Vec<String> = terms.iter().map(|t| format!("{t:.4}")).collect();
        writeln!(
            f,
            "  P(x | {label}) = {} = {:.4}",
            factors.join(" × "),
            self.outcome.classes[c].likelihood.value()
        )?;
        writeln!(f)
    }

    fn gaussian_likelihood(&self, f: &mut Formatter<'_>, c: usize, s: &GaussianStatistics) -> Result {
        let label = self.label(c);
        let terms = s
            .feature_likelihoods(&self.outcome.query)
            .map_err(|_| std::fmt::Error)?;
        writeln!(f, "{label}: f(x; μ, σ) = (1 / (σ√(2π))) · e^(−(x − μ)² / (2σ²))")?;
        for (i, &x) in self.outcome.query.iter().enumerate() {
            let (mean, sd) = (s.means[i], s.std_devs[i]);
            let sq = (x - mean) * (x - mean);
            let two_var = 2.0 * sd * sd;
            let exponent = -sq / two_var;
            writeln!(f, "  {} = {}:", self.feature(i), num(x))?;
            writeln!(f, "    (x − μ)² = ({} − {mean:.4})² = {sq:.4}", num(x))?;
            writeln!(f, "    2σ² = 2 × {sd:.4}² = {two_var:.4}")?;
            writeln!(f, "    exponent = −{sq:.4} / {two_var:.4} = {exponent:.4}")?;
            writeln!(
                f,
                "    coefficient = 1 / ({sd:.4} × √(2π)) = {:.6}",
                gaussian_coefficient(sd)
            )?;
            writeln!(f, "    density = {:.6e}", terms[i])?;
        }
        writeln!(
            f,
            "  P(x | {label}) = product of densities = {:.6e}",
            self.outcome.classes[c].likelihood.value()
        )?;
        writeln!(f)
    }

    fn multinomial_likelihood(
        &self,
        f: &mut Formatter<'_>,
        c: usize,
        s: &MultinomialStatistics,
    ) -> Result {
        let label = self.label(c);
        let terms = s.word_terms(&self.outcome.query).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{label}: ln P(x | {label}) = Σ count_i × ln P(word_i | {label})")?;
        if terms.is_empty() {
            writeln!(f, "  no word of the query occurs, every term is 0")?;
        }
        for t in &terms {
            writeln!(
                f,
                "  '{}': {} × ln({:.4}) = {:.4}",
                self.feature(t.word_index),
                t.count,
                t.probability,
                t.log_term
            )?;
        }
        let likelihood = self.outcome.classes[c].likelihood;
        writeln!(f, "  ln P(x | {label}) = {:.4}", likelihood.ln())?;
        writeln!(
            f,
            "  P(x | {label}) = e^{:.4} = {:.6e}",
            likelihood.ln(),
            likelihood.value()
        )?;
        writeln!(f)
    }

    fn priors(&self, f: &mut Formatter<'_>) -> Result {
        section(f, 4, "Priors")?;
        let classes = &self.outcome.classes;
        match &self.outcome.prior_source {
            Priors::ClassFrequency => {
                let counts = self.dataset.class_counts();
                let total = self.dataset.len();
                writeln!(f, "Estimated from class frequencies in the training data")?;
                for (c, class) in classes.iter().enumerate() {
                    writeln!(
                        f,
                        "  P({}) = {} / {total} = {:.4}",
                        class.label, counts[c], class.prior
                    )?;
                }
            }
            Priors::Uniform => {
                writeln!(f, "Uniform over {} classes", classes.len())?;
                for class in classes {
                    writeln!(f, "  P({}) = 1 / {} = {:.4}", class.label, classes.len(), class.prior)?;
                }
            }
            Priors::Explicit(values) => {
                if values.windows(2).all(|w| w[0] == w[1]) {
                    writeln!(f, "Assuming balanced classes, priors fixed externally")?;
                } else {
                    writeln!(f, "Fixed externally, not estimated from the training rows")?;
                }
                for class in classes {
                    writeln!(f, "  P({}) = {:.4}", class.label, class.prior)?;
                }
            }
        }
        Ok(())
    }

    fn direct_posterior(&self, f: &mut Formatter<'_>) -> Result {
        section(f, 5, "Posterior")?;
        writeln!(f, "P(class | x) ∝ P(x | class) × P(class)")?;
        for class in &self.outcome.classes {
            writeln!(
                f,
                "  P({} | x) ∝ {:.6e} × {:.4} = {:.6e}",
                class.label,
                class.likelihood.value(),
                class.prior,
                class.joint
            )?;
        }
        let parts: Vec<String> = self
            .outcome
            .classes
            .iter()
            .map(|c| format!("{:.6e}", c.joint))
            .collect();
        writeln!(f)?;
        writeln!(
            f,
            "P(x) = {} = {:.6e}",
            parts.join(" + "),
            self.outcome.normalizer
        )?;
        for class in &self.outcome.classes {
            writeln!(
                f,
                "  P({} | x) = {:.6e} / {:.6e} = {:.4} = {}",
                class.label,
                class.joint,
                self.outcome.normalizer,
                class.probability,
                pct(class.probability)
            )?;
        }
        Ok(())
    }

    fn log_posterior(&self, f: &mut Formatter<'_>) -> Result {
        section(f, 5, "Posterior (log space)")?;
        writeln!(f, "ln P(class | x) ∝ ln P(x | class) + ln P(class)")?;
        for class in &self.outcome.classes {
            writeln!(
                f,
                "  ln P({} | x) ∝ {:.4} + {:.4} = {:.4}",
                class.label,
                class.likelihood.ln(),
                class.prior.ln(),
                class.joint
            )?;
        }
        let max = self
            .outcome
            .classes
            .iter()
            .map(|c| c.joint)
            .fold(f64::NEG_INFINITY, f64::max);
        writeln!(f)?;
        writeln!(f, "log-sum-exp: subtract the maximum before exponentiating")?;
        writeln!(f, "  max = {max:.4}")?;
        writeln!(f, "  ln P(x) = {:.4}", self.outcome.normalizer)?;
        for class in &self.outcome.classes {
            let shifted = class.joint - self.outcome.normalizer;
            writeln!(
                f,
                "  P({} | x) = exp({:.4} − {:.4}) = exp({shifted:.4}) = {:.4} = {}",
                class.label,
                class.joint,
                self.outcome.normalizer,
                class.probability,
                pct(class.probability)
            )?;
        }
        Ok(())
    }

    fn decision(&self, f: &mut Formatter<'_>) -> Result {
        let d = &self.outcome.decision;
        section(f, 6, "Decision")?;
        writeln!(f, "Decision: {}", d.label)?;
        writeln!(f, "  Confidence = (P_max − P_second) / P_max")?;
        writeln!(
            f,
            "             = ({:.4} − {:.4}) / {:.4} = {:.4}",
            d.probability, d.runner_up_probability, d.probability, d.confidence
        )?;
        writeln!(f, "Confidence: {}", pct(d.confidence))
    }

    /// Per-word probabilities of every word the query contains.
    fn word_analysis(&self, f: &mut Formatter<'_>) -> Result {
        let per_class: Option<Vec<&MultinomialStatistics>> = self
            .outcome
            .statistics
            .iter()
            .map(|s| match s {
                ClassStatistics::Multinomial(m) => Some(m),
                _ => None,
            })
            .collect();
        let Some(per_class) = per_class else {
            return Ok(());
        };

        section(f, 7, "Word analysis for the query")?;
        for (i, &count) in self.outcome.query.iter().enumerate() {
            if count <= 0.0 {
                continue;
            }
            let unit = if count == 1.0 { "occurrence" } else { "occurrences" };
            writeln!(f, "  '{}': {} {unit}", self.feature(i), num(count))?;
            for (c, stats) in per_class.iter().enumerate() {
                writeln!(
                    f,
                    "    P('{}' | {}) = {:.4}",
                    self.feature(i),
                    self.label(c),
                    stats.probabilities[i]
                )?;
            }
        }
        Ok(())
    }
}
