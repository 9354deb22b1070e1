//! Minimal gatherer used by the unit tests

use tribe_common::{default_gene_ranges, Gatherer, Genome};

#[derive(Debug, Clone)]
pub(crate) struct TestGatherer {
    genes: Genome,
    alive: bool,
    fitness: Option<f64>,
}

impl TestGatherer {
    /// Default genes with a fixed fitness
    pub(crate) fn with_fitness(fitness: f64) -> Self {
        Self::spawn(None).scored(fitness)
    }

    pub(crate) fn with_genes(genes: Genome) -> Self {
        Self::spawn(Some(genes))
    }

    pub(crate) fn scored(mut self, fitness: f64) -> Self {
        self.fitness = Some(fitness);
        self
    }

    pub(crate) fn dead(mut self) -> Self {
        self.alive = false;
        self
    }
}

/// Midpoint of every default range
pub(crate) fn midpoint_genome() -> Genome {
    default_gene_ranges()
        .into_iter()
        .map(|(gene, range)| (gene, (range.min + range.max) / 2.0))
        .collect()
}

impl Gatherer for TestGatherer {
    fn spawn(genes: Option<Genome>) -> Self {
        Self {
            genes: genes.unwrap_or_else(midpoint_genome),
            alive: true,
            fitness: None,
        }
    }

    fn genes(&self) -> &Genome {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut Genome {
        &mut self.genes
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    /// Fixed fitness if one was given, otherwise the sum of gene values
    fn calculate_fitness(&self) -> f64 {
        self.fitness
            .unwrap_or_else(|| self.genes.iter().map(|(_, value)| value).sum())
    }
}
