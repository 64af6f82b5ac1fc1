//! Seeding configuration and run summary.
//!
//! This module contains the knobs that control how much fake data a
//! seeding run generates, and the report it hands back.

/// How many records of each kind a seeding run creates.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub grupos: usize,
    pub estudiantes: usize,
    pub conceptos: usize,
    pub pagos: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            grupos: 6,
            estudiantes: 40,
            conceptos: 5,
            pagos: 25,
        }
    }
}

impl SeedConfig {
    /// Creates a configuration with the specified number of students.
    pub fn new(estudiantes: usize) -> Self {
        Self {
            estudiantes,
            ..Default::default()
        }
    }

    /// Sets the number of enrollment groups.
    pub fn with_grupos(mut self, grupos: usize) -> Self {
        self.grupos = grupos;
        self
    }

    /// Sets the number of fee concepts.
    pub fn with_conceptos(mut self, conceptos: usize) -> Self {
        self.conceptos = conceptos;
        self
    }

    /// Sets the number of payments.
    pub fn with_pagos(mut self, pagos: usize) -> Self {
        self.pagos = pagos;
        self
    }

    /// Total records a full run will request from the API.
    pub fn total_registros(&self) -> usize {
        self.grupos + self.estudiantes + self.conceptos + self.pagos
    }
}

/// Counts of records actually created by a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub grupos: usize,
    pub estudiantes: usize,
    pub conceptos: usize,
    pub pagos: usize,
}

impl SeedReport {
    /// Total records created across every entity.
    pub fn total(&self) -> usize {
        self.grupos + self.estudiantes + self.conceptos + self.pagos
    }
}
