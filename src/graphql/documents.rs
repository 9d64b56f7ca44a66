//! Operation documents consumed by the client, grouped queries first.
//!
//! Selection sets must stay in lockstep with the records in
//! [`crate::domain`]; the server ignores over-selection but the typed
//! extraction in the resource hooks relies on every selected field.

pub const GET_PORTFOLIO: &str = r#"
query GetPortfolio {
  getPortfolio {
    profile {
      id
      name
      title
      bio
      avatarUrl
      social {
        platform
        icon
        url
      }
    }
    projects {
      id
      title
      description
      skills
      url
      image
    }
    skills {
      id
      name
      level
      icon
    }
    experiences {
      id
      company
      role
      startDate
      endDate
      details
    }
  }
}
"#;

pub const GET_PROFILE: &str = r#"
query GetProfile {
  getProfile {
    id
    name
    title
    bio
    avatarUrl
    social {
      platform
      icon
      url
    }
  }
}
"#;

pub const GET_PROJECTS: &str = r#"
query GetProjects {
  getProjects {
    id
    title
    description
    skills
    url
    image
  }
}
"#;

pub const GET_SKILLS: &str = r#"
query GetSkills {
  getSkills {
    id
    name
    level
    icon
  }
}
"#;

pub const GET_EXPERIENCES: &str = r#"
query GetExperiences {
  getExperiences {
    id
    company
    role
    startDate
    endDate
    details
  }
}
"#;

pub const LOGIN: &str = r#"
mutation Login($username: String!, $password: String!) {
  login(username: $username, password: $password) {
    token
  }
}
"#;

pub const LOGOUT: &str = r#"
mutation Logout {
  logout
}
"#;

pub const UPDATE_PROFILE: &str = r#"
mutation UpdateProfile($input: ProfileInput!) {
  updateProfile(input: $input) {
    id
    name
    title
    bio
    avatarUrl
    social {
      platform
      icon
      url
    }
  }
}
"#;

pub const CREATE_PROJECT: &str = r#"
mutation CreateProject($input: ProjectInput!) {
  createProject(input: $input) {
    id
    title
    description
    skills
    url
    image
  }
}
"#;

pub const UPDATE_PROJECT: &str = r#"
mutation UpdateProject($id: ID!, $input: ProjectInput!) {
  updateProject(id: $id, input: $input) {
    id
    title
    description
    skills
    url
    image
  }
}
"#;

pub const DELETE_PROJECT: &str = r#"
mutation DeleteProject($id: ID!) {
  deleteProject(id: $id)
}
"#;

pub const CREATE_SKILL: &str = r#"
mutation CreateSkill($input: SkillInput!) {
  createSkill(input: $input) {
    id
    name
    level
    icon
  }
}
"#;

pub const UPDATE_SKILL: &str = r#"
mutation UpdateSkill($id: ID!, $input: SkillInput!) {
  updateSkill(id: $id, input: $input) {
    id
    name
    level
    icon
  }
}
"#;

pub const DELETE_SKILL: &str = r#"
mutation DeleteSkill($id: ID!) {
  deleteSkill(id: $id)
}
"#;

pub const CREATE_EXPERIENCE: &str = r#"
mutation CreateExperience($input: ExperienceInput!) {
  createExperience(input: $input) {
    id
    company
    role
    startDate
    endDate
    details
  }
}
"#;

pub const UPDATE_EXPERIENCE: &str = r#"
mutation UpdateExperience($id: ID!, $input: ExperienceInput!) {
  updateExperience(id: $id, input: $input) {
    id
    company
    role
    startDate
    endDate
    details
  }
}
"#;

pub const DELETE_EXPERIENCE: &str = r#"
mutation DeleteExperience($id: ID!) {
  deleteExperience(id: $id)
}
"#;
