//! Client service functions, one per endpoint.
//!
//! Every function has the fixed parameter order
//! `(...pathArgs, params?, data, config?)` and wraps the client call in a
//! `try`/`catch` that rethrows the error unchanged.

use apigen_common::{Endpoint, HttpMethod, ParameterLocation};

use super::ir::utils::sanitize_ts_identifier;
use super::ir::{
    Emit, ObjectEntry, TemplatePart, TsExpr, TsFunction, TsImport, TsLiteral, TsModule, TsParam,
    TsPrimitive, TsStmt, TsType,
};
use super::type_mapper::map_type;
use super::types::EndpointTypes;
use super::{CodegenConfig, GeneratedService};
use crate::naming::function_name;

/// A path argument: the `{token}` it fills and the identifier carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathArg {
    pub token: String,
    pub ident: String,
}

/// One argument per distinct `{token}` of the path template, in order of
/// appearance.
pub(crate) fn path_args(endpoint: &Endpoint) -> Vec<PathArg> {
    let mut args: Vec<PathArg> = Vec::new();
    for token in endpoint.path_tokens() {
        if args.iter().any(|a| a.token == token) {
            continue;
        }
        let mut ident = sanitize_ts_identifier(token);
        while args.iter().any(|a| a.ident == ident) {
            ident.push('_');
        }
        args.push(PathArg {
            token: token.to_string(),
            ident,
        });
    }
    args
}

/// TypeScript type of a path argument: the declared parameter's type when it
/// is a primitive, otherwise `string`.
fn path_arg_type(endpoint: &Endpoint, token: &str) -> TsType {
    endpoint
        .path_parameter(token)
        .and_then(|param| map_type(&param.to_property_schema()).ok())
        .filter(|ty| matches!(ty, TsType::Primitive(_) | TsType::Union(_) | TsType::Literal(_)))
        .unwrap_or_else(TsType::string)
}

/// Whether the `params` argument must be supplied.
fn params_required(endpoint: &Endpoint, types: &EndpointTypes) -> bool {
    types.request.is_some()
        || endpoint
            .parameters
            .iter()
            .any(|p| p.location == ParameterLocation::Query && p.required)
}

/// The request URL: a plain string literal, or a template literal with each
/// `{token}` replaced by its argument.
fn url_expr(endpoint: &Endpoint, args: &[PathArg]) -> TsExpr {
    if args.is_empty() {
        return TsExpr::Literal(TsLiteral::String(endpoint.path.clone()));
    }
    let mut parts = Vec::new();
    let mut rest = endpoint.path.as_str();
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let token = &after[..close];
        match args.iter().find(|a| a.token == token) {
            Some(arg) => {
                if open > 0 {
                    parts.push(TemplatePart::Static(rest[..open].to_string()));
                }
                parts.push(TemplatePart::Dynamic(TsExpr::ident(&arg.ident)));
            }
            None => parts.push(TemplatePart::Static(rest[..open + close + 2].to_string())),
        }
        rest = &after[close + 1..];
    }
    if !rest.is_empty() {
        parts.push(TemplatePart::Static(rest.to_string()));
    }
    TsExpr::Template(parts)
}

/// Client method for an HTTP verb: `apiClient.get`, `apiClient.post`, ...
fn client_verb(method: &HttpMethod) -> String {
    method.as_str().to_ascii_lowercase()
}

fn client_call(
    endpoint: &Endpoint,
    types: &EndpointTypes,
    args: &[PathArg],
    config: &CodegenConfig,
) -> TsExpr {
    let config_arg = if types.params.is_some() {
        TsExpr::Object(vec![
            ObjectEntry::Spread(TsExpr::ident("config")),
            ObjectEntry::Shorthand("params".into()),
        ])
    } else {
        TsExpr::ident("config")
    };

    let mut call_args = vec![url_expr(endpoint, args)];
    if endpoint.method.carries_body() {
        call_args.push(if types.request.is_some() {
            TsExpr::ident("data")
        } else {
            TsExpr::ident("undefined")
        });
    }
    call_args.push(config_arg);

    TsExpr::Call {
        callee: Box::new(TsExpr::member(
            TsExpr::ident(&config.client_name),
            client_verb(&endpoint.method),
        )),
        type_args: vec![response_type(types)],
        args: call_args,
    }
}

fn response_type(types: &EndpointTypes) -> TsType {
    types
        .response
        .as_ref()
        .map_or(TsType::Primitive(TsPrimitive::Void), TsType::named)
}

/// JSDoc lines: summary, description and the deprecation tag.
pub(crate) fn doc_lines(endpoint: &Endpoint, fallback: String) -> Vec<String> {
    let mut docs: Vec<String> = [&endpoint.summary, &endpoint.description]
        .into_iter()
        .flatten()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect();
    docs.dedup();
    if docs.is_empty() {
        docs.push(fallback);
    }
    if docs.len() == 2 {
        docs.insert(1, String::new());
    }
    if endpoint.deprecated {
        docs.push("@deprecated".to_string());
    }
    docs
}

/// Build the service function of one endpoint.
pub(crate) fn service_function(
    endpoint: &Endpoint,
    types: &EndpointTypes,
    config: &CodegenConfig,
) -> TsFunction {
    let args = path_args(endpoint);

    let mut params: Vec<TsParam> = args
        .iter()
        .map(|arg| TsParam {
            name: arg.ident.clone(),
            ty: Some(path_arg_type(endpoint, &arg.token)),
            optional: false,
        })
        .collect();
    if let Some(name) = &types.params {
        params.push(TsParam {
            name: "params".into(),
            ty: Some(TsType::named(name)),
            optional: !params_required(endpoint, types),
        });
    }
    if let Some(name) = &types.request {
        params.push(TsParam {
            name: "data".into(),
            ty: Some(TsType::named(name)),
            optional: false,
        });
    }
    params.push(TsParam {
        name: "config".into(),
        ty: Some(TsType::named("RequestConfig")),
        optional: true,
    });

    let call = client_call(endpoint, types, &args, config);

    TsFunction {
        name: function_name(endpoint),
        docs: doc_lines(endpoint, format!("{} {}", endpoint.method, endpoint.path)),
        params,
        return_type: Some(TsType::generic(
            "Promise",
            TsType::generic("APIResponse", response_type(types)),
        )),
        body: vec![TsStmt::TryCatch {
            body: vec![TsStmt::Return(Some(TsExpr::Await(Box::new(call))))],
            catch_param: "error".into(),
            catch_body: vec![TsStmt::Throw(TsExpr::ident("error"))],
        }],
        is_async: true,
        is_export: true,
    }
}

/// Type names referenced by a service signature.
fn signature_types(types: &EndpointTypes) -> impl Iterator<Item = &String> {
    [&types.params, &types.request, &types.response]
        .into_iter()
        .flatten()
}

/// Import statements for service functions referencing `used_types`.
fn service_imports(mut used_types: Vec<String>, config: &CodegenConfig) -> Vec<TsImport> {
    used_types.sort();
    used_types.dedup();

    let mut imports = vec![
        TsImport {
            items: vec![config.client_name.clone()],
            from: config.client_module.clone(),
            type_only: false,
        },
        TsImport {
            items: vec!["APIResponse".into(), "RequestConfig".into()],
            from: config.client_module.clone(),
            type_only: true,
        },
    ];
    if !used_types.is_empty() {
        imports.push(TsImport {
            items: used_types,
            from: config.types_module.clone(),
            type_only: true,
        });
    }
    imports
}

/// Generate the service unit of one endpoint.
pub(crate) fn generate_service(
    endpoint: &Endpoint,
    types: &EndpointTypes,
    config: &CodegenConfig,
) -> GeneratedService {
    let function = service_function(endpoint, types, config);
    GeneratedService {
        name: endpoint.name.clone(),
        function_name: function.name.clone(),
        code: function.emit(),
        types: types.names(),
        imports: service_imports(signature_types(types).cloned().collect(), config)
            .iter()
            .map(Emit::emit)
            .map(|line| line.trim_end().to_string())
            .collect(),
        endpoint: endpoint.clone(),
    }
}

/// Assemble the services artifact: merged imports, then every function.
/// `types` runs parallel to `services`.
pub(crate) fn services_module(
    services: &[GeneratedService],
    types: &[EndpointTypes],
    header: Vec<String>,
    config: &CodegenConfig,
) -> String {
    let mut module = TsModule {
        header,
        ..TsModule::default()
    };
    if !services.is_empty() {
        let used_types = types.iter().flat_map(signature_types).cloned().collect();
        module.imports = service_imports(used_types, config);
    }

    let mut output = module.emit();
    for service in services {
        output.push_str(&service.code);
        output.push('\n');
    }
    output
}
