//! Company and job generators.

use fake::faker::company::raw::{
    Bs, Buzzword, CatchPhrase, CompanyName, CompanySuffix, Industry, Profession,
};
use fake::faker::job::raw::{Field, Position, Seniority, Title};
use fake::locales::EN;

use super::fake_text;
use crate::descriptor::OutputKind;
use crate::ingest::RawEntry;

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry {
        native: "company",
        label: "Company",
        category: "company",
        description: "Company name",
        example: "Moen, Pagac and Wuckert",
        output: OutputKind::String,
        params: &[],
        generate: company,
    },
    RawEntry {
        native: "companysuffix",
        label: "Company Suffix",
        category: "company",
        description: "Legal suffix of a company name",
        example: "Inc",
        output: OutputKind::String,
        params: &[],
        generate: company_suffix,
    },
    RawEntry {
        native: "buzzword",
        label: "Buzz Word",
        category: "company",
        description: "Corporate buzzword",
        example: "disintermediate",
        output: OutputKind::String,
        params: &[],
        generate: buzz_word,
    },
    RawEntry {
        native: "bs",
        label: "BS",
        category: "company",
        description: "Corporate jargon phrase",
        example: "aggregate granular markets",
        output: OutputKind::String,
        params: &[],
        generate: bs,
    },
    RawEntry {
        native: "catchphrase",
        label: "Catch Phrase",
        category: "company",
        description: "Marketing catch phrase",
        example: "Universal logistical artificial intelligence",
        output: OutputKind::String,
        params: &[],
        generate: catch_phrase,
    },
    RawEntry {
        native: "industry",
        label: "Industry",
        category: "company",
        description: "Industry sector",
        example: "Renewables & Environment",
        output: OutputKind::String,
        params: &[],
        generate: industry,
    },
    RawEntry {
        native: "profession",
        label: "Profession",
        category: "company",
        description: "Occupation",
        example: "astronomer",
        output: OutputKind::String,
        params: &[],
        generate: profession,
    },
    RawEntry {
        native: "jobtitle",
        label: "Title",
        category: "job",
        description: "Job title",
        example: "Senior Data Analyst",
        output: OutputKind::String,
        params: &[],
        generate: job_title,
    },
    RawEntry {
        native: "jobdescriptor",
        label: "Descriptor",
        category: "job",
        description: "Seniority descriptor of a job",
        example: "Lead",
        output: OutputKind::String,
        params: &[],
        generate: job_descriptor,
    },
    RawEntry {
        native: "joblevel",
        label: "Level",
        category: "job",
        description: "Position level of a job",
        example: "Coordinator",
        output: OutputKind::String,
        params: &[],
        generate: job_level,
    },
    RawEntry {
        native: "jobfield",
        label: "Field",
        category: "job",
        description: "Field a job belongs to",
        example: "Marketing",
        output: OutputKind::String,
        params: &[],
        generate: job_field,
    },
];

fake_text!(company, CompanyName(EN));
fake_text!(company_suffix, CompanySuffix(EN));
fake_text!(buzz_word, Buzzword(EN));
fake_text!(bs, Bs(EN));
fake_text!(catch_phrase, CatchPhrase(EN));
fake_text!(industry, Industry(EN));
fake_text!(profession, Profession(EN));
fake_text!(job_title, Title(EN));
fake_text!(job_descriptor, Seniority(EN));
fake_text!(job_level, Position(EN));
fake_text!(job_field, Field(EN));
