use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::normalize;

/// Slugs for articles, blogs and categories all follow [`normalize`].
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        normalize(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_and_article_titles_share_rules() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Église de Villers"), "eglise-de-villers");
        assert_eq!(slugger.slugify("Hello, World!"), "hello-world");
    }
}
