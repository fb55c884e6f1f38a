// Static prompt boilerplate shipped with the binary. Lookups are
// total-or-absent: an unknown key contributes nothing, it never errors.

pub const TASK_TYPES: &[&str] = &[
    "Feature",
    "Fix",
    "Refactor",
    "Performance",
    "Security",
    "Migration",
    "Review",
    "Question",
    "Doc",
    "Test",
    "Architecture",
    "Research",
    "Blog",
    "Others",
];

pub const CUSTOM_INSTRUCTION_TYPES: &[&str] = &[
    "Default",
    "React/Next.js",
    "Node.js API",
    "Database",
    "Cloud/DevOps",
    "Mobile",
    "Question",
];

pub fn task_type_template(key: &str) -> Option<&'static str> {
    let text = match key {
        "Feature" => {
            "<task-title>Develop new functionality</task-title>\n\n\
             <context>\n\
             - Implement using established patterns\n\
             - Maintain strict type safety\n\
             - Follow secure coding practices\n\
             - Include comprehensive tests\n\
             - Document public APIs\n\
             </context>"
        }
        "Fix" => {
            "<task-title>Resolve software defect</task-title>\n\n\
             <context>\n\
             - Analyze root cause\n\
             - Verify fix across edge cases\n\
             - Add regression tests\n\
             - Preserve API contracts\n\
             - Document fix rationale\n\
             </context>"
        }
        "Refactor" => {
            "<task-title>Improve code structure</task-title>\n\n\
             <context>\n\
             - Maintain existing behavior\n\
             - Enhance maintainability\n\
             - Reduce technical debt\n\
             - Update documentation\n\
             - Verify test coverage\n\
             </context>"
        }
        "Performance" => {
            "<task-title>Optimize performance</task-title>\n\n\
             <context>\n\
             - Profile current behavior\n\
             - Identify bottlenecks\n\
             - Measure improvements\n\
             - Consider trade-offs\n\
             - Document optimizations\n\
             </context>"
        }
        "Security" => {
            "<task-title>Enhance security</task-title>\n\n\
             <context>\n\
             - Follow security best practices\n\
             - Analyze attack vectors\n\
             - Handle sensitive data\n\
             - Add security tests\n\
             - Document mitigations\n\
             </context>"
        }
        "Migration" => {
            "<task-title>Migrate codebase</task-title>\n\n\
             <context>\n\
             - Plan migration strategy\n\
             - Handle compatibility\n\
             - Update dependencies\n\
             - Verify functionality\n\
             - Document changes\n\
             </context>"
        }
        "Review" => {
            "<task-title>Code review feedback</task-title>\n\n\
             <context>\n\
             - Check design patterns\n\
             - Verify error handling\n\
             - Review performance\n\
             - Assess security\n\
             - Suggest improvements\n\
             </context>"
        }
        "Question" => {
            "<task-title>Provide technical guidance</task-title>\n\n\
             <context>\n\
             - Compare approaches\n\
             - Explain trade-offs\n\
             - Reference docs\n\
             - Show examples\n\
             - Consider context\n\
             </context>"
        }
        "Doc" => {
            "<task-title>Update documentation</task-title>\n\n\
             <context>\n\
             - Maintain accuracy\n\
             - Improve clarity\n\
             - Add examples\n\
             - Update diagrams\n\
             - Verify completeness\n\
             </context>"
        }
        "Test" => {
            "<task-title>Improve test coverage</task-title>\n\n\
             <context>\n\
             - Add missing tests\n\
             - Cover edge cases\n\
             - Test error paths\n\
             - Measure coverage\n\
             - Document test cases\n\
             </context>"
        }
        "Architecture" => {
            "<task-title>Design system architecture</task-title>\n\n\
             <context>\n\
             - Consider scalability\n\
             - Plan for maintenance\n\
             - Document decisions\n\
             - Evaluate trade-offs\n\
             - Define interfaces\n\
             </context>"
        }
        "Research" => {
            "<task-title>Technical research</task-title>\n\n\
             <context>\n\
             - Analyze options\n\
             - Compare solutions\n\
             - Consider constraints\n\
             - Provide examples\n\
             - Document findings\n\
             </context>"
        }
        "Blog" => {
            "<task-title>Create technical content</task-title>\n\n\
             <context>\n\
             - Target audience level\n\
             - Use clear examples\n\
             - Include visuals/code\n\
             - Follow progression\n\
             - Verify accuracy\n\
             </context>"
        }
        "Others" => {
            "<task-title>Handle custom request</task-title>\n\n\
             <context>\n\
             - Clarify requirements\n\
             - Propose solutions\n\
             - Consider constraints\n\
             - Highlight risks\n\
             - Document approach\n\
             </context>"
        }
        _ => return None,
    };
    Some(text)
}

pub fn custom_instruction_template(key: &str) -> Option<&'static str> {
    let text = match key {
        "Default" => {
            "<output-format>\n\
             - Production-grade code\n\
             - Essential comments\n\
             - Clear type annotations\n\
             - Error handling\n\
             - Usage examples\n\
             </output-format>\n\n\
             <reasoning-process>\n\
             - Analyze requirements\n\
             - Consider alternatives\n\
             - Validate assumptions\n\
             - Check security\n\
             - Handle edge cases\n\
             </reasoning-process>"
        }
        "React/Next.js" => {
            "<technical-stack>\n\
             - React 18+/Next.js 14+\n\
             - TypeScript 5+\n\
             - Tailwind CSS\n\
             - Component libraries\n\
             </technical-stack>\n\n\
             <development-constraints>\n\
             - Component architecture\n\
             - Client/server split\n\
             - Performance patterns\n\
             - Accessibility\n\
             </development-constraints>\n\n\
             <output-requirements>\n\
             - Reusable components\n\
             - State management\n\
             - Error boundaries\n\
             - Loading states\n\
             - Responsive design\n\
             </output-requirements>"
        }
        "Node.js API" => {
            "<technical-stack>\n\
             - Node.js LTS\n\
             - TypeScript 5+\n\
             - REST/GraphQL\n\
             - Database ORM\n\
             </technical-stack>\n\n\
             <development-constraints>\n\
             - API versioning\n\
             - Request validation\n\
             - Error handling\n\
             - Performance\n\
             </development-constraints>\n\n\
             <output-requirements>\n\
             - RESTful endpoints\n\
             - Input validation\n\
             - Error responses\n\
             - API documentation\n\
             - Security headers\n\
             </output-requirements>"
        }
        "Database" => {
            "<technical-requirements>\n\
             - SQL standards\n\
             - Index optimization\n\
             - Transaction safety\n\
             - Data integrity\n\
             - Query performance\n\
             </technical-requirements>\n\n\
             <implementation-constraints>\n\
             - Schema design\n\
             - Query optimization\n\
             - Migration safety\n\
             - Backup strategy\n\
             </implementation-constraints>\n\n\
             <output-format>\n\
             - Clean queries\n\
             - Index definitions\n\
             - Performance notes\n\
             - Migration scripts\n\
             - Rollback plans\n\
             </output-format>"
        }
        "Cloud/DevOps" => {
            "<infrastructure-requirements>\n\
             - Cloud provider best practices\n\
             - Infrastructure as Code\n\
             - Security compliance\n\
             - Monitoring setup\n\
             </infrastructure-requirements>\n\n\
             <deployment-constraints>\n\
             - High availability\n\
             - Disaster recovery\n\
             - Cost optimization\n\
             - Performance metrics\n\
             </deployment-constraints>\n\n\
             <output-requirements>\n\
             - IaC templates\n\
             - Documentation\n\
             - Monitoring config\n\
             - Security controls\n\
             - Backup procedures\n\
             </output-requirements>"
        }
        "Mobile" => {
            "<technical-stack>\n\
             - React Native/Flutter\n\
             - Native APIs\n\
             - State management\n\
             - Network handling\n\
             </technical-stack>\n\n\
             <development-constraints>\n\
             - Platform specifics\n\
             - Performance\n\
             - Offline support\n\
             - Battery usage\n\
             </development-constraints>\n\n\
             <output-requirements>\n\
             - Native features\n\
             - Error handling\n\
             - Loading states\n\
             - Responsive UI\n\
             - Platform builds\n\
             </output-requirements>"
        }
        "Question" => {
            "<response-format>\n\
             - Clear explanation\n\
             - Code examples\n\
             - Best practices\n\
             - Common pitfalls\n\
             - Further reading\n\
             </response-format>\n\n\
             <depth-level>\n\
             - Fundamental concepts\n\
             - Practical usage\n\
             - Edge cases\n\
             - Performance implications\n\
             - Security considerations\n\
             </depth-level>\n\n\
             <output-requirements>\n\
             - Complete answers\n\
             - Visual examples\n\
             - Alternative approaches\n\
             - Reference links\n\
             - Follow-up steps\n\
             </output-requirements>"
        }
        _ => return None,
    };
    Some(text)
}
