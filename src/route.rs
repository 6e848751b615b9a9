//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由，以及根据会话状态决定"渲染还是重定向"的规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 根路径，总是重定向
    #[default]
    Root,
    /// 登录页面
    Login,
    /// 注册页面
    Signup,
    /// 商品列表 / 购物车 (需要认证)
    Items,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::Root,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/items" => Self::Items,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Items => "/items",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Items)
    }

    /// 定义已认证用户是否应该离开此路由（登录页、注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Items
    }

    /// 根据会话状态决定该路由的去向
    pub fn resolve(self, is_authenticated: bool) -> Resolution {
        if self == Self::Root {
            return Resolution::Redirect(if is_authenticated {
                Self::auth_success_redirect()
            } else {
                Self::auth_failure_redirect()
            });
        }

        if self.requires_auth() && !is_authenticated {
            return Resolution::Redirect(Self::auth_failure_redirect());
        }

        if self.should_redirect_when_authenticated() && is_authenticated {
            return Resolution::Redirect(Self::auth_success_redirect());
        }

        Resolution::Render(match self {
            Self::Login => Screen::Login,
            Self::Signup => Screen::Signup,
            Self::Items => Screen::Items,
            Self::Root | Self::NotFound => Screen::NotFound,
        })
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 可渲染的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Items,
    NotFound,
}

/// 路由解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 直接渲染页面
    Render(Screen),
    /// 替换当前地址并重定向
    Redirect(AppRoute),
}

impl Resolution {
    /// 跟随重定向直到得到可渲染的页面
    ///
    /// 重定向目标本身不会再重定向（Login/Items 在对应会话状态下总是直接渲染），
    /// 因此最多跟随一次。
    pub fn settle(route: AppRoute, is_authenticated: bool) -> (AppRoute, Screen) {
        match route.resolve(is_authenticated) {
            Resolution::Render(screen) => (route, screen),
            Resolution::Redirect(target) => match target.resolve(is_authenticated) {
                Resolution::Render(screen) => (target, screen),
                // 不可达：保底落到未找到页面
                Resolution::Redirect(_) => (AppRoute::NotFound, Screen::NotFound),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Root);
        assert_eq!(AppRoute::from_path(""), AppRoute::Root);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/signup/"), AppRoute::Signup);
        assert_eq!(AppRoute::from_path("/items"), AppRoute::Items);
        assert_eq!(AppRoute::from_path("/carts"), AppRoute::NotFound);
    }

    #[test]
    fn test_root_always_redirects() {
        assert_eq!(
            AppRoute::Root.resolve(true),
            Resolution::Redirect(AppRoute::Items)
        );
        assert_eq!(
            AppRoute::Root.resolve(false),
            Resolution::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_authenticated_user_leaves_login_and_signup() {
        for route in [AppRoute::Login, AppRoute::Signup] {
            assert_eq!(route.resolve(true), Resolution::Redirect(AppRoute::Items));
        }
        assert_eq!(
            AppRoute::Items.resolve(true),
            Resolution::Render(Screen::Items)
        );
    }

    #[test]
    fn test_anonymous_user_is_sent_to_login() {
        assert_eq!(
            AppRoute::Items.resolve(false),
            Resolution::Redirect(AppRoute::Login)
        );
        assert_eq!(
            AppRoute::Login.resolve(false),
            Resolution::Render(Screen::Login)
        );
        assert_eq!(
            AppRoute::Signup.resolve(false),
            Resolution::Render(Screen::Signup)
        );
    }

    #[test]
    fn test_not_found_ignores_session() {
        assert_eq!(
            AppRoute::NotFound.resolve(true),
            Resolution::Render(Screen::NotFound)
        );
        assert_eq!(
            AppRoute::NotFound.resolve(false),
            Resolution::Render(Screen::NotFound)
        );
    }

    #[test]
    fn test_settle_every_route_terminates() {
        let routes = [
            AppRoute::Root,
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::Items,
            AppRoute::NotFound,
        ];
        for is_auth in [true, false] {
            for route in routes {
                let (settled, screen) = Resolution::settle(route, is_auth);
                assert_eq!(settled.resolve(is_auth), Resolution::Render(screen));
            }
        }
    }
}
