//! Templated node selection: substitute arguments, then run the query.

use crate::config::SelectorConfig;
use crate::error::GrovepathError;
use crate::executor::QueryExecutor;
use grovepath_template::substitute_with;
use grovepath_types::DocumentNode;
use std::borrow::Cow;

/// Selects nodes with query templates such as
/// `//PersVeh[@id = $veh and @RatedDriverRef = $driver]/Coverage`.
pub struct Selector<E> {
    executor: E,
    config: SelectorConfig,
}

impl<E> Selector<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            config: SelectorConfig::default(),
        }
    }

    pub fn with_config(executor: E, config: SelectorConfig) -> Result<Self, GrovepathError> {
        config.validate()?;
        Ok(Self { executor, config })
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Materializes the concrete query for `template` and `arguments`.
    pub fn prepare<'t, S: AsRef<str>>(
        &self,
        template: &'t str,
        arguments: &[S],
    ) -> Result<Cow<'t, str>, GrovepathError> {
        if arguments.is_empty() && !self.config.substitute_without_arguments {
            return Ok(Cow::Borrowed(template));
        }
        let query = substitute_with(template, arguments, &self.config.template)?;
        Ok(Cow::Owned(query))
    }

    /// All nodes matched by the rendered query, relative to `context`.
    /// An absent context selects nothing.
    pub fn select_many<'a, N, S>(
        &self,
        context: Option<N>,
        template: &str,
        arguments: &[S],
    ) -> Result<Vec<N>, GrovepathError>
    where
        N: DocumentNode<'a>,
        E: QueryExecutor<'a, N>,
        S: AsRef<str>,
    {
        let Some(context) = context else {
            return Ok(Vec::new());
        };
        let query = self.prepare(template, arguments)?;
        let nodes = self.executor.select_nodes(context, &query)?;
        log::debug!("Query '{}' selected {} node(s)", query, nodes.len());
        Ok(nodes)
    }

    /// The first node matched by the rendered query, if any.
    pub fn select_single<'a, N, S>(
        &self,
        context: Option<N>,
        template: &str,
        arguments: &[S],
    ) -> Result<Option<N>, GrovepathError>
    where
        N: DocumentNode<'a>,
        E: QueryExecutor<'a, N>,
        S: AsRef<str>,
    {
        Ok(self
            .select_many(context, template, arguments)?
            .into_iter()
            .next())
    }
}
