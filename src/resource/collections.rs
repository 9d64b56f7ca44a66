//! Concrete collections: projects, skills, experiences.

use std::sync::Arc;

use super::{Collection, CollectionOps};
use crate::cache::QueryCache;
use crate::domain::{Experience, ExperienceInput, Project, ProjectInput, Skill, SkillInput};
use crate::graphql::{documents, RequestGateway};

static PROJECT_OPS: CollectionOps = CollectionOps {
    list_document: documents::GET_PROJECTS,
    list_field: "getProjects",
    create_document: documents::CREATE_PROJECT,
    create_field: "createProject",
    update_document: documents::UPDATE_PROJECT,
    update_field: "updateProject",
    delete_document: documents::DELETE_PROJECT,
    delete_field: "deleteProject",
};

static SKILL_OPS: CollectionOps = CollectionOps {
    list_document: documents::GET_SKILLS,
    list_field: "getSkills",
    create_document: documents::CREATE_SKILL,
    create_field: "createSkill",
    update_document: documents::UPDATE_SKILL,
    update_field: "updateSkill",
    delete_document: documents::DELETE_SKILL,
    delete_field: "deleteSkill",
};

static EXPERIENCE_OPS: CollectionOps = CollectionOps {
    list_document: documents::GET_EXPERIENCES,
    list_field: "getExperiences",
    create_document: documents::CREATE_EXPERIENCE,
    create_field: "createExperience",
    update_document: documents::UPDATE_EXPERIENCE,
    update_field: "updateExperience",
    delete_document: documents::DELETE_EXPERIENCE,
    delete_field: "deleteExperience",
};

pub fn projects(
    gateway: Arc<RequestGateway>,
    cache: Arc<QueryCache>,
) -> Collection<Project, ProjectInput> {
    Collection::new(gateway, cache, &PROJECT_OPS)
}

pub fn skills(
    gateway: Arc<RequestGateway>,
    cache: Arc<QueryCache>,
) -> Collection<Skill, SkillInput> {
    Collection::new(gateway, cache, &SKILL_OPS)
}

pub fn experiences(
    gateway: Arc<RequestGateway>,
    cache: Arc<QueryCache>,
) -> Collection<Experience, ExperienceInput> {
    Collection::new(gateway, cache, &EXPERIENCE_OPS)
}
